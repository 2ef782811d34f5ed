//! Cache error taxonomy.

use thiserror::Error;

/// Errors surfaced by cache operations.
///
/// `KeyNotExist` is the only domain sentinel this layer introduces; every
/// other driver failure is relayed unchanged through the `Driver` variant so
/// callers can still inspect the original error.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The key is absent from the store. Produced on read paths only.
    #[error("key does not exist")]
    KeyNotExist,

    /// A typed accessor was called on a value holding another representation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Connection pool failure.
    #[error("cache connection failed: {0}")]
    Connection(String),

    /// Driver error passed through unchanged.
    #[error(transparent)]
    Driver(#[from] redis::RedisError),
}

impl CacheError {
    /// Whether this error is the "key absent" sentinel.
    pub fn is_key_not_exist(&self) -> bool {
        matches!(self, CacheError::KeyNotExist)
    }
}

/// Type alias for Result with CacheError to simplify function signatures.
pub type CacheResult<T> = Result<T, CacheError>;
