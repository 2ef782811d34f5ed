//! CommandClient trait definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;
use crate::value::Value;

/// Capability for dispatching commands to a Redis-compatible store.
///
/// Read paths return `Ok(None)` for the driver's "key absent" reply; the
/// facade owns turning that into [`CacheError::KeyNotExist`]. Implementations
/// never retry. Cancellation is cooperative: dropping the returned future
/// abandons the round trip, and deadlines belong to the caller.
///
/// [`CacheError::KeyNotExist`]: crate::CacheError::KeyNotExist
#[async_trait]
pub trait CommandClient: Send + Sync {
    /// Store `value` under `key`. A `None` ttl means no expiration.
    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> CacheResult<()>;

    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> CacheResult<Option<Value>>;

    /// Store `value` only if `key` does not already exist. Returns whether
    /// the value was newly set.
    async fn set_nx(&self, key: &str, value: Value, ttl: Option<Duration>) -> CacheResult<bool>;

    /// Atomically replace the value under `key`, returning the previous one.
    async fn get_set(&self, key: &str, value: Value) -> CacheResult<Option<Value>>;
}
