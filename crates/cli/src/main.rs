pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use error::Error;
use log_args::LogArgs;
use output::{build_output_path, print_with_less};
use tracing::{info, Level};

use clap::{Parser, Subcommand};

use stevedore_common::utils::io::file::{short_path, write_file};
use stevedore_config::{config, ConfigArgs, Configuration};
use stevedore_transform::{transform, TransformArgs};

#[derive(Debug, Parser)]
#[clap(name = "stevedore", author = "stevedore contributors", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "Stevedore is a toolkit for replatforming discovered applications onto Kubernetes.",
    after_help = "For more information, read the wiki: https://github.com/stevedore-tools/stevedore/wiki"
)]
pub enum Subcommands {
    #[clap(
        name = "transform",
        about = "Transform a discovered application plan into Kubernetes manifests"
    )]
    Transform(TransformArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _ = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {e}")))?;
    match args.sub {
        Subcommands::Transform(mut cmd) => {
            // if the user has not specified an output directory, use the configured default
            if cmd.output.as_str() == "" {
                cmd.output = configuration.output_dir;
            }

            let result = transform(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to transform plan: {e}")))?;

            if args.logs.verbosity.level() >= Level::DEBUG {
                result.display();
            }

            // if the user has passed an output filename, prefix each manifest with it
            let given_name = cmd.name.as_str();

            if cmd.output == "print" {
                let mut output_str = String::new();
                for manifest in &result.manifests {
                    output_str.push_str(&format!("# {}\n{}\n", manifest.filename, manifest.content));
                }

                print_with_less(&output_str)
                    .await
                    .map_err(|e| Error::Generic(format!("failed to print manifests: {e}")))?;
            } else {
                for manifest in &result.manifests {
                    let mut filename = manifest.filename.clone();
                    if !given_name.is_empty() {
                        filename = format!("{given_name}-{filename}");
                    }

                    let output_path = build_output_path(&cmd.output, &result.ir.name, &filename)
                        .map_err(|e| Error::Generic(format!("failed to build output path: {e}")))?;

                    write_file(&output_path, &manifest.content)
                        .map_err(|e| Error::Generic(format!("failed to write manifest: {e}")))?;
                    info!("wrote manifest to {}", short_path(&output_path));
                }
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {e}")))?;
        }
    }

    Ok(())
}
