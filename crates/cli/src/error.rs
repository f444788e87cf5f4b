#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Transform error: {0}")]
    TransformError(#[from] stevedore_transform::Error),
}
