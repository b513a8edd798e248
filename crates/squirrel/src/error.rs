//! Error types for resolver implementations
//!
//! Cache operations never fail: a miss is `None`, and a resolver failure is
//! reported as a miss. [`ResolveError`] exists for resolvers that want a
//! ready-made error type to return from the closure handed to
//! [`fallible`](crate::resolver::fallible), which logs the error and turns it
//! into a miss.

use std::time::Duration;

use thiserror::Error;

/// Result type for fallible resolvers
pub type ResolveResult<V> = Result<Option<V>, ResolveError>;

/// Reasons a resolver could not produce a value
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The backing source could not be reached
    #[error("Resolver source '{source_name}' unavailable: {message}")]
    Unavailable {
        /// Name of the backing source
        source_name: String,
        /// Why it could not be reached
        message: String,
    },

    /// The lookup did not complete in time
    #[error("Resolver timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure from the backing source
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ResolveError {
    /// Create an unavailable error
    pub fn unavailable<S: Into<String>, M: Into<String>>(source_name: S, message: M) -> Self {
        Self::Unavailable { source_name: source_name.into(), message: message.into() }
    }

    /// Create a timeout error
    pub fn timeout(duration: Duration) -> Self {
        Self::Timeout(duration)
    }

    /// Wrap an arbitrary backend error
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}
