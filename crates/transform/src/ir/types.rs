use std::fmt;

use hashbrown::HashMap;
use stevedore_common::plan::Plan;

/// Root of the intermediate representation: the full set of deployable
/// workloads derived from one plan. Owned by the pipeline for the duration
/// of a run and rewritten in turn by each optimization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ir {
    /// Name of the plan this representation was seeded from.
    pub name: String,
    /// Deployable workloads, keyed by service name. Iteration order is
    /// not significant; emission sorts by name.
    pub services: HashMap<String, Service>,
}

/// One deployable workload and its pod template containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Service name. Matches the service's key in [`Ir::services`].
    pub name: String,
    /// Desired replica count.
    pub replicas: i32,
    /// Containers in declaration order. Order is preserved through every
    /// pass and is meaningful to manifest emission.
    pub containers: Vec<Container>,
}

/// One container within a service's pod template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    /// Container name.
    pub name: String,
    /// The container image reference.
    pub image: String,
    /// Ports the container exposes.
    pub ports: Vec<u16>,
    /// When the container runtime re-fetches the image.
    pub image_pull_policy: PullPolicy,
}

/// When the container runtime re-fetches a container's image.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PullPolicy {
    /// Re-fetch the image on every container start
    Always,
    /// Only fetch the image if it is not already present on the node
    IfNotPresent,
    /// Never fetch the image
    Never,
    /// No explicit policy has been assigned yet. Every container starts
    /// out in this state when the representation is seeded from a plan.
    #[default]
    Unset,
}

impl PullPolicy {
    /// The manifest string form of the policy, or `None` for
    /// [`PullPolicy::Unset`], which has no manifest representation.
    pub fn as_manifest_str(&self) -> Option<&'static str> {
        match self {
            PullPolicy::Always => Some("Always"),
            PullPolicy::IfNotPresent => Some("IfNotPresent"),
            PullPolicy::Never => Some("Never"),
            PullPolicy::Unset => None,
        }
    }
}

impl fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_manifest_str().unwrap_or("Unset"))
    }
}

impl Service {
    /// Creates a service with the given name and replica count and no
    /// containers.
    pub fn new(name: &str, replicas: i32) -> Self {
        Self { name: name.to_string(), replicas, containers: Vec::new() }
    }
}

impl Ir {
    /// Seeds a fresh representation from a plan: one service per planned
    /// service, one container per planned container. Replica counts the
    /// plan does not specify are seeded as zero, and every container
    /// starts with an unset pull policy; both are filled in by the
    /// optimization passes.
    pub fn new(plan: &Plan) -> Self {
        let mut services = HashMap::with_capacity(plan.services.len());
        for planned in &plan.services {
            let mut service = Service::new(&planned.name, planned.replicas.unwrap_or(0));
            for container in &planned.containers {
                service.containers.push(Container {
                    name: container.name.clone(),
                    image: container.image.clone(),
                    ports: container.ports.clone(),
                    image_pull_policy: PullPolicy::default(),
                });
            }
            services.insert(service.name.clone(), service);
        }

        Self { name: plan.name.clone(), services }
    }
}
