#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Plan error: {0}")]
    PlanError(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
