use serde::Serialize;

use crate::{
    ir::types::{Container, Ir, Service},
    Error,
};

/// A single emitted manifest document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Suggested file name for the document.
    pub filename: String,
    /// The serialized YAML document.
    pub content: String,
}

/// Emits one `apps/v1` Deployment manifest per service in the
/// representation.
#[derive(Debug, Clone, Default)]
pub struct ManifestEmitter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Deployment<'a> {
    api_version: &'static str,
    kind: &'static str,
    metadata: Metadata<'a>,
    spec: DeploymentSpec<'a>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    name: &'a str,
    labels: Labels<'a>,
}

#[derive(Serialize)]
struct Labels<'a> {
    app: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentSpec<'a> {
    replicas: i32,
    selector: Selector<'a>,
    template: PodTemplate<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Selector<'a> {
    match_labels: Labels<'a>,
}

#[derive(Serialize)]
struct PodTemplate<'a> {
    metadata: TemplateMetadata<'a>,
    spec: PodSpec<'a>,
}

#[derive(Serialize)]
struct TemplateMetadata<'a> {
    labels: Labels<'a>,
}

#[derive(Serialize)]
struct PodSpec<'a> {
    containers: Vec<ContainerManifest<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContainerManifest<'a> {
    name: &'a str,
    image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_pull_policy: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ports: Vec<ContainerPort>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContainerPort {
    container_port: u16,
}

impl ManifestEmitter {
    /// Creates a new emitter.
    pub fn new() -> Self {
        Self
    }

    /// Serializes every service in the representation into its Deployment
    /// manifest. Services are emitted in sorted name order so the output
    /// is deterministic regardless of map iteration order.
    pub fn emit(&self, ir: &Ir) -> Result<Vec<Manifest>, Error> {
        let mut services: Vec<&Service> = ir.services.values().collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));

        let mut manifests = Vec::with_capacity(services.len());
        for service in services {
            manifests.push(Manifest {
                filename: format!("{}-deployment.yaml", service.name),
                content: serde_yaml::to_string(&Self::deployment(service))?,
            });
        }
        Ok(manifests)
    }

    fn deployment(service: &Service) -> Deployment<'_> {
        Deployment {
            api_version: "apps/v1",
            kind: "Deployment",
            metadata: Metadata { name: &service.name, labels: Labels { app: &service.name } },
            spec: DeploymentSpec {
                replicas: service.replicas,
                selector: Selector { match_labels: Labels { app: &service.name } },
                template: PodTemplate {
                    metadata: TemplateMetadata { labels: Labels { app: &service.name } },
                    spec: PodSpec {
                        containers: service.containers.iter().map(Self::container).collect(),
                    },
                },
            },
        }
    }

    fn container(container: &Container) -> ContainerManifest<'_> {
        ContainerManifest {
            name: &container.name,
            image: &container.image,
            image_pull_policy: container.image_pull_policy.as_manifest_str(),
            ports: container
                .ports
                .iter()
                .map(|port| ContainerPort { container_port: *port })
                .collect(),
        }
    }
}
