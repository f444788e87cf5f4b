pub mod image_pull_policy;
pub mod names;
pub mod replicas;

use crate::{ir::types::Ir, Error};

/// Runs every optimization pass over the representation in a fixed order.
///
/// All passes share the same signature so the pipeline can thread the IR
/// through them uniformly; a pass that cannot fail simply always returns
/// `Ok`. The first error stops the pipeline.
pub fn run_all_passes(mut ir: Ir) -> Result<Ir, Error> {
    // Phase 1: Normalization
    ir = names::run(ir)?;

    // Phase 2: Defaulting
    ir = replicas::run(ir)?;
    ir = image_pull_policy::run(ir)?;

    Ok(ir)
}
