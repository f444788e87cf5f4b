use clap::Parser;
use derive_builder::Builder;
use eyre::Result;
use stevedore_common::plan::Plan;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Transform a discovered application plan into Kubernetes manifests",
    after_help = "For more information, read the wiki: https://github.com/stevedore-tools/stevedore/wiki",
    override_usage = "stevedore transform <TARGET> [OPTIONS]"
)]
/// Arguments for the transform operation
///
/// This struct contains the configuration parameters needed to transform a
/// discovered application plan into deployable manifests.
pub struct TransformArgs {
    /// The target plan file to transform.
    #[clap(required = true)]
    pub target: String,

    /// The output directory to write the manifests to, or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "", hide_default_value = true)]
    pub output: String,

    /// The name to prefix output files with
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl TransformArgs {
    /// Reads and parses the plan file for the specified target.
    pub fn get_plan(&self) -> Result<Plan> {
        Plan::from_file(&self.target)
    }
}

impl TransformArgsBuilder {
    /// Creates a new TransformArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            output: Some(String::new()),
            name: Some(String::new()),
        }
    }
}
