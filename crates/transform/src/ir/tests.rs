#[cfg(test)]
mod tests {
    use stevedore_common::plan::{Plan, PlanContainer, PlanService};

    use crate::ir::{
        passes,
        types::{Ir, PullPolicy},
        ManifestEmitter,
    };

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new("webapp");
        plan.services.push(PlanService {
            name: "frontend".to_string(),
            replicas: Some(3),
            containers: vec![PlanContainer {
                name: "nginx".to_string(),
                image: "docker.io/library/nginx:1.25".to_string(),
                ports: vec![80],
            }],
        });
        plan.services.push(PlanService {
            name: "Back_End".to_string(),
            replicas: None,
            containers: vec![PlanContainer {
                name: "api".to_string(),
                image: "docker.io/example/api:latest".to_string(),
                ports: vec![8080],
            }],
        });
        plan
    }

    #[test]
    fn test_plan_seeds_ir_with_unset_policies() {
        let ir = Ir::new(&create_test_plan());

        assert_eq!(ir.name, "webapp");
        assert_eq!(ir.services.len(), 2);
        assert_eq!(ir.services["frontend"].replicas, 3);
        assert_eq!(ir.services["Back_End"].replicas, 0);
        for service in ir.services.values() {
            for container in &service.containers {
                assert_eq!(container.image_pull_policy, PullPolicy::Unset);
            }
        }
    }

    #[test]
    fn test_full_pipeline_normalizes_ir() {
        let ir = passes::run_all_passes(Ir::new(&create_test_plan())).expect("pipeline failed");

        // names are valid dns labels
        assert!(ir.services.contains_key("frontend"));
        assert!(ir.services.contains_key("back-end"));

        // replica counts are usable
        assert_eq!(ir.services["frontend"].replicas, 3);
        assert_eq!(ir.services["back-end"].replicas, 2);

        // every container has an explicit pull policy
        for service in ir.services.values() {
            for container in &service.containers {
                assert_eq!(container.image_pull_policy, PullPolicy::Always);
            }
        }
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let once = passes::run_all_passes(Ir::new(&create_test_plan())).expect("pipeline failed");
        let twice = passes::run_all_passes(once.clone()).expect("pipeline failed");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_emitted_manifests_are_deterministic_and_complete() {
        let ir = passes::run_all_passes(Ir::new(&create_test_plan())).expect("pipeline failed");
        let manifests = ManifestEmitter::new().emit(&ir).expect("emission failed");

        // sorted by service name
        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[0].filename, "back-end-deployment.yaml");
        assert_eq!(manifests[1].filename, "frontend-deployment.yaml");

        let backend = &manifests[0].content;
        assert!(backend.contains("apiVersion: apps/v1"));
        assert!(backend.contains("kind: Deployment"));
        assert!(backend.contains("name: back-end"));
        assert!(backend.contains("replicas: 2"));
        assert!(backend.contains("imagePullPolicy: Always"));
        assert!(backend.contains("containerPort: 8080"));

        let frontend = &manifests[1].content;
        assert!(frontend.contains("replicas: 3"));
        assert!(frontend.contains("image: docker.io/library/nginx:1.25"));
    }

    #[test]
    fn test_unset_policy_is_omitted_from_manifests() {
        // emit without running any pass; seeded policies are all unset
        let ir = Ir::new(&create_test_plan());
        let manifests = ManifestEmitter::new().emit(&ir).expect("emission failed");

        for manifest in &manifests {
            assert!(!manifest.content.contains("imagePullPolicy"));
        }
    }
}
