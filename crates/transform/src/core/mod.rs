use std::time::Instant;

use eyre::eyre;
use tracing::{debug, info};

use crate::{
    error::Error,
    interfaces::TransformArgs,
    ir::{
        emit::{Manifest, ManifestEmitter},
        passes::run_all_passes,
        types::Ir,
    },
};

#[derive(Debug, Clone)]
/// Result of a successful transform operation
///
/// Contains the normalized intermediate representation and the manifests
/// emitted from it.
pub struct TransformResult {
    /// The normalized intermediate representation the manifests were
    /// emitted from
    pub ir: Ir,
    /// The emitted manifest documents, one per service
    pub manifests: Vec<Manifest>,
}

impl TransformResult {
    /// Traces a summary of the transformation at info level.
    pub fn display(&self) {
        info!(
            "transformed plan '{}' into {} manifest(s)",
            self.ir.name,
            self.manifests.len()
        );
        for manifest in &self.manifests {
            info!("  {}", manifest.filename);
        }
    }
}

/// Transforms a discovered application plan into Kubernetes manifests.
///
/// The plan is read once to seed the intermediate representation; the full
/// pass pipeline then rewrites the representation before one manifest per
/// service is emitted from the final value.
///
/// # Arguments
///
/// * `args` - Configuration parameters for the transform operation
///
/// # Returns
///
/// A TransformResult containing the normalized representation and the
/// emitted manifests
pub async fn transform(args: TransformArgs) -> Result<TransformResult, Error> {
    let start_time = Instant::now();

    // validate arguments
    if args.target.is_empty() {
        return Err(Error::Eyre(eyre!("no target plan file specified.")));
    }

    // read the plan from the target
    let start_plan_time = Instant::now();
    let plan = args
        .get_plan()
        .map_err(|e| Error::PlanError(format!("reading target plan failed: {e}")))?;
    debug!("reading target plan took {:?}", start_plan_time.elapsed());

    if plan.name.is_empty() {
        return Err(Error::PlanError("plan has no application name".to_string()));
    }

    // seed the representation and run the full pass pipeline over it
    let start_passes_time = Instant::now();
    let ir = run_all_passes(Ir::new(&plan))?;
    debug!("optimization passes took {:?}", start_passes_time.elapsed());

    // emit one manifest per service
    let manifests = ManifestEmitter::new().emit(&ir)?;

    debug!("transformed plan '{}' in {:?}", plan.name, start_time.elapsed());

    Ok(TransformResult { ir, manifests })
}
