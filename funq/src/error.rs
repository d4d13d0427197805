//! Error type for computation invocation.

use thiserror::Error;

/// Why invoking a computation failed.
///
/// Composition never produces one of these. Every variant surfaces at
/// invocation time, to the immediate caller of `invoke`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FunqError {
    /// An unbound computation was passed to a combinator or invoked.
    /// Nothing was evaluated.
    #[error("computation is unbound")]
    NullComputation,

    /// An optional computation produced no value where one was required.
    #[error("optional computation produced no value")]
    AbsentResult,

    /// An erased value did not have the requested type.
    #[error("cannot cast {actual} to {expected}")]
    CastMismatch {
        /// The type the caller asked for.
        expected: &'static str,
        /// The type the value actually has.
        actual: &'static str,
    },

    /// Catch-all for failures raised by user closures. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl FunqError {
    /// Wrap any error raised inside a fallible primitive.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}
