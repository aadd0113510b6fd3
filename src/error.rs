use thiserror::Error;

/// Top-level error type for wireframe model generation.
#[derive(Debug, Error)]
pub enum WireframeError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors raised while validating generator parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be at least {min}")]
    InvalidParameter {
        parameter: &'static str,
        value: i32,
        min: i32,
    },
}

/// Errors related to mesh and scene bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("vertex index {index} is out of range for a mesh with {count} vertices")]
    VertexOutOfRange { index: usize, count: usize },

    #[error("model not found in scene")]
    ModelNotFound,
}

/// Convenience type alias for results using [`WireframeError`].
pub type Result<T> = std::result::Result<T, WireframeError>;
