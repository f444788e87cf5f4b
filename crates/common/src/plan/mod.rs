//! The plan is the discovery-phase artifact describing an application's
//! deployable components. It is consumed exactly once, to seed the
//! intermediate representation, and is never mutated afterwards.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::io::file::read_file;

/// A discovered application plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Name of the discovered application.
    pub name: String,

    /// The deployable services discovered for the application.
    #[serde(default)]
    pub services: Vec<PlanService>,
}

/// One deployable service discovered in the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanService {
    /// Name of the service as discovered. Not guaranteed to be a valid
    /// Kubernetes resource name.
    pub name: String,

    /// Desired replica count, if the discovery phase found one.
    #[serde(default)]
    pub replicas: Option<i32>,

    /// Containers that make up the service, in declaration order.
    #[serde(default)]
    pub containers: Vec<PlanContainer>,
}

/// One container within a discovered service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanContainer {
    /// Name of the container as discovered.
    pub name: String,

    /// The container image reference.
    pub image: String,

    /// Ports the container exposes.
    #[serde(default)]
    pub ports: Vec<u16>,
}

impl Plan {
    /// Creates an empty plan for the named application.
    pub fn new(name: &str) -> Self {
        Plan { name: name.to_string(), services: Vec::new() }
    }

    /// Reads and parses a plan from a YAML file on disk.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents =
            read_file(path).wrap_err_with(|| format!("unable to read plan file '{path}'"))?;
        let plan: Plan = serde_yaml::from_str(&contents)
            .wrap_err_with(|| format!("unable to parse plan file '{path}'"))?;

        debug!("loaded plan '{}' with {} service(s)", plan.name, plan.services.len());
        Ok(plan)
    }
}
