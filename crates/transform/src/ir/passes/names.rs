use crate::{ir::types::Ir, Error};
use hashbrown::HashSet;
use stevedore_common::utils::strings::{is_valid_label, normalize_label};
use tracing::warn;

/// Normalizes every service and container name into a valid RFC 1123 DNS
/// label so downstream emission never produces a name Kubernetes would
/// reject. Service map keys are renamed together with the services they
/// hold.
///
/// Every rename is planned before anything is mutated, so a failing run
/// returns the error with the input representation untouched.
pub fn run(mut ir: Ir) -> Result<Ir, Error> {
    let mut target_names = HashSet::with_capacity(ir.services.len());
    let mut renames = Vec::new();
    for service in ir.services.values() {
        let name = if is_valid_label(&service.name) {
            service.name.clone()
        } else {
            let normalized =
                normalize_label(&service.name).map_err(|e| Error::InvalidName(e.to_string()))?;
            renames.push((service.name.clone(), normalized.clone()));
            normalized
        };
        if !target_names.insert(name.clone()) {
            return Err(Error::InvalidName(format!(
                "two services would share the name '{name}' after normalization"
            )));
        }
        for container in &service.containers {
            if !is_valid_label(&container.name) {
                normalize_label(&container.name).map_err(|e| Error::InvalidName(e.to_string()))?;
            }
        }
    }

    for (old, new) in renames {
        if let Some(mut service) = ir.services.remove(&old) {
            warn!("service name '{old}' is not a valid dns label, renaming to '{new}'");
            service.name = new.clone();
            ir.services.insert(new, service);
        }
    }

    for service in ir.services.values_mut() {
        for container in &mut service.containers {
            if !is_valid_label(&container.name) {
                let normalized = normalize_label(&container.name)
                    .map_err(|e| Error::InvalidName(e.to_string()))?;
                warn!(
                    "container name '{}' in service '{}' is not a valid dns label, renaming to '{normalized}'",
                    container.name, service.name
                );
                container.name = normalized;
            }
        }
    }

    Ok(ir)
}
