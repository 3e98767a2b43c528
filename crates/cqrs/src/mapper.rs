//! Explicit object-to-object projection.

use thiserror::Error;

/// A source value could not be projected into the destination shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A field required by the destination was absent on the source.
    #[error("mapping failed: missing field `{0}`")]
    MissingField(&'static str),

    /// The source held a value the destination cannot represent.
    #[error("mapping failed: {0}")]
    Incompatible(String),
}

/// Projects `S` into `D`.
///
/// Implementations are pure and synchronous: no IO, no clock, no shared state.
/// Each field correspondence is written out by hand so the contract stays
/// visible at the mapping site.
pub trait Mapper<S, D>: Send + Sync {
    fn map(&self, source: &S) -> Result<D, MappingError>;
}

impl<S, D, M> Mapper<S, D> for std::sync::Arc<M>
where
    M: Mapper<S, D> + ?Sized,
{
    fn map(&self, source: &S) -> Result<D, MappingError> {
        (**self).map(source)
    }
}
