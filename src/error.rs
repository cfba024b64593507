use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),

    #[error("Invalid affine transform: {0}")]
    Affine(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Unknown projection: {0}")]
    UnknownProjection(String),

    #[error("Point outside projection domain: {0}")]
    OutOfDomain(String),
}
