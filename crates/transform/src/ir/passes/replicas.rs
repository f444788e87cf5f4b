use crate::{ir::types::Ir, Error};
use stevedore_common::constants::DEFAULT_REPLICA_COUNT;
use tracing::debug;

/// Gives every service a usable replica count. A plan that never mentions
/// replicas seeds the representation with a count of zero, which would
/// emit a deployment that schedules nothing; such services (and any with a
/// negative count) get the default. Positive counts are preserved.
pub fn run(mut ir: Ir) -> Result<Ir, Error> {
    for service in ir.services.values_mut() {
        if service.replicas <= 0 {
            debug!(
                "defaulting replica count of service '{}' to {}",
                service.name, DEFAULT_REPLICA_COUNT
            );
            service.replicas = DEFAULT_REPLICA_COUNT;
        }
    }
    Ok(ir)
}
