#[cfg(test)]
mod integration_tests {
    use stevedore_common::utils::io::file::{delete_path, write_file};
    use stevedore_transform::{transform, Error, TransformArgsBuilder};

    const TEST_PLAN: &str = r"
name: webapp
services:
  - name: frontend
    replicas: 3
    containers:
      - name: nginx
        image: docker.io/library/nginx:1.25
        ports: [80]
  - name: Back_End
    containers:
      - name: api
        image: docker.io/example/api:latest
";

    fn write_test_plan(name: &str) -> String {
        let path = std::env::temp_dir().join(name);
        let path = path.to_str().expect("failed to build plan path").to_string();
        write_file(&path, TEST_PLAN).expect("failed to write plan file");
        path
    }

    #[tokio::test]
    async fn test_transform_plan() {
        let plan_path = write_test_plan("stevedore-test-plan.yaml");

        let result = transform(
            TransformArgsBuilder::new()
                .target(plan_path.clone())
                .build()
                .expect("failed to build args"),
        )
        .await
        .expect("failed to transform plan");

        assert_eq!(result.ir.name, "webapp");
        assert_eq!(result.manifests.len(), 2);

        // every container ends up with an explicit pull policy
        for manifest in &result.manifests {
            assert!(manifest.content.contains("imagePullPolicy: Always"));
        }

        // the invalid service name was normalized, the unset replica count
        // was defaulted, and the explicit one was preserved
        assert_eq!(result.manifests[0].filename, "back-end-deployment.yaml");
        assert!(result.manifests[0].content.contains("replicas: 2"));
        assert_eq!(result.manifests[1].filename, "frontend-deployment.yaml");
        assert!(result.manifests[1].content.contains("replicas: 3"));

        delete_path(&plan_path);
    }

    #[tokio::test]
    async fn test_transform_missing_plan_errors() {
        let result = transform(
            TransformArgsBuilder::new()
                .target("/nonexistent/stevedore-plan.yaml".to_string())
                .build()
                .expect("failed to build args"),
        )
        .await;

        assert!(matches!(result, Err(Error::PlanError(_))));
    }

    #[tokio::test]
    async fn test_transform_empty_target_errors() {
        let result =
            transform(TransformArgsBuilder::new().build().expect("failed to build args")).await;

        assert!(result.is_err());
    }
}
