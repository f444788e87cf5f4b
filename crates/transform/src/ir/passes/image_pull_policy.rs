use crate::{
    ir::types::{Ir, PullPolicy},
    Error,
};
use tracing::debug;

/// Ensures every container has an explicit, deterministic image pull
/// behavior: a container with no policy is set to [`PullPolicy::Always`],
/// and a container with any explicit policy keeps it untouched.
///
/// No other field of the representation is read or written, so re-running
/// the pass on its own output is a no-op.
pub fn run(mut ir: Ir) -> Result<Ir, Error> {
    for service in ir.services.values_mut() {
        for container in &mut service.containers {
            if container.image_pull_policy == PullPolicy::Unset {
                debug!(
                    "defaulting image pull policy of container '{}' in service '{}' to Always",
                    container.name, service.name
                );
                container.image_pull_policy = PullPolicy::Always;
            }
        }
    }
    Ok(ir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::types::{Container, Service};
    use stevedore_common::plan::Plan;

    fn ir_without_services() -> Ir {
        Ir::new(&Plan::new("test-app"))
    }

    fn ir_with_services_without_containers() -> Ir {
        let mut ir = ir_without_services();
        ir.services.insert("svcname1".to_string(), Service::new("svcname1", 2));
        ir.services.insert("svcname2".to_string(), Service::new("svcname2", 2));
        ir
    }

    fn container(name: &str, policy: PullPolicy) -> Container {
        Container {
            name: name.to_string(),
            image: format!("quay.io/example/{name}:latest"),
            ports: vec![8080],
            image_pull_policy: policy,
        }
    }

    fn ir_with_policy(policy: PullPolicy) -> Ir {
        let mut ir = ir_without_services();
        let mut svc1 = Service::new("svcname1", 2);
        svc1.containers.push(container("container-1", policy));
        let mut svc2 = Service::new("svcname2", 4);
        svc2.containers.push(container("container-2", policy));
        ir.services.insert(svc1.name.clone(), svc1);
        ir.services.insert(svc2.name.clone(), svc2);
        ir
    }

    #[test]
    fn test_ir_without_services_is_unchanged() {
        let want = ir_without_services();

        let actual = run(ir_without_services()).expect("pass failed");

        assert_eq!(actual, want);
    }

    #[test]
    fn test_services_without_containers_are_unchanged() {
        let want = ir_with_services_without_containers();

        let actual = run(ir_with_services_without_containers()).expect("pass failed");

        assert_eq!(actual, want);
    }

    #[test]
    fn test_unset_policies_default_to_always() {
        let want = ir_with_policy(PullPolicy::Always);

        let actual = run(ir_with_policy(PullPolicy::Unset)).expect("pass failed");

        assert_eq!(actual, want);
    }

    #[test]
    fn test_always_policies_are_preserved() {
        let want = ir_with_policy(PullPolicy::Always);

        let actual = run(ir_with_policy(PullPolicy::Always)).expect("pass failed");

        assert_eq!(actual, want);
    }

    #[test]
    fn test_explicit_policies_are_preserved() {
        for policy in [PullPolicy::IfNotPresent, PullPolicy::Never] {
            let want = ir_with_policy(policy);

            let actual = run(ir_with_policy(policy)).expect("pass failed");

            assert_eq!(actual, want);
        }
    }

    #[test]
    fn test_pass_is_idempotent() {
        let once = run(ir_with_policy(PullPolicy::Unset)).expect("pass failed");
        let twice = run(once.clone()).expect("pass failed");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_structure_is_preserved() {
        let actual = run(ir_with_policy(PullPolicy::Unset)).expect("pass failed");

        assert_eq!(actual.services.len(), 2);
        let svc1 = &actual.services["svcname1"];
        let svc2 = &actual.services["svcname2"];
        assert_eq!(svc1.replicas, 2);
        assert_eq!(svc2.replicas, 4);
        assert_eq!(svc1.containers[0].name, "container-1");
        assert_eq!(svc2.containers[0].name, "container-2");
    }
}
