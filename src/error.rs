use thiserror::Error;

/// Top-level error type for the conica toolkit.
///
/// Geometric degeneracy (parallel lines, disjoint circles, tangency) is never
/// an error; those outcomes are reported as `None` or an empty `Vec`. Errors
/// are reserved for invalid construction input and unsupported queries.
#[derive(Debug, Error)]
pub enum ConicaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("invalid radius {0}: must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("non-finite {0} coordinate")]
    NonFinite(&'static str),
}

/// Errors related to tolerance configuration.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid epsilon {0}: must be finite and strictly positive")]
    InvalidEpsilon(f64),
}

/// Errors related to queries over curves.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("unsupported query: {0}")]
    Unsupported(&'static str),
}

/// Convenience type alias for results using [`ConicaError`].
pub type Result<T> = std::result::Result<T, ConicaError>;
