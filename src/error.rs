use thiserror::Error;

/// Errors related to geometric computations.
///
/// Geometric *non-intersection* is never an error: intersection queries
/// return `Option` instead. This type covers construction of entities that
/// violate their own invariants.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
