//! Cache facade normalizing driver outcomes for callers.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CacheError, CacheResult};
use crate::traits::CommandClient;
use crate::value::Value;

/// Facade over a [`CommandClient`].
///
/// Stateless beyond the held client reference; cloning is cheap and every
/// operation maps 1:1 to one client round trip. The facade installs no
/// timeout and never retries. Deadlines and cancellation belong to the
/// caller and the client.
#[derive(Clone)]
pub struct Cache {
    client: Arc<dyn CommandClient>,
}

impl Cache {
    /// Create a facade over the given command client.
    pub fn new(client: Arc<dyn CommandClient>) -> Self {
        Self { client }
    }

    /// Store `value` under `key` with optional expiration.
    ///
    /// Driver errors are returned unchanged; "set" has no not-found case,
    /// so no translation applies here.
    pub async fn set(
        &self,
        key: &str,
        value: impl Into<Value>,
        ttl: Option<Duration>,
    ) -> CacheResult<()> {
        self.client.set(key, value.into(), ttl).await
    }

    /// Fetch the value stored under `key`.
    ///
    /// The driver's absent reply becomes [`CacheError::KeyNotExist`]; any
    /// other driver error is relayed unchanged.
    pub async fn get(&self, key: &str) -> CacheResult<Value> {
        self.client.get(key).await?.ok_or(CacheError::KeyNotExist)
    }

    /// Store `value` only if `key` does not already exist.
    ///
    /// `Ok(false)` means the key was already present, which is a successful
    /// conditional outcome, never an error.
    pub async fn set_nx(
        &self,
        key: &str,
        value: impl Into<Value>,
        ttl: Option<Duration>,
    ) -> CacheResult<bool> {
        self.client.set_nx(key, value.into(), ttl).await
    }

    /// Replace the value under `key`, returning the previous value.
    ///
    /// An absent previous value translates to [`CacheError::KeyNotExist`],
    /// mirroring [`Cache::get`]. Other driver errors pass through unchanged.
    pub async fn get_set(&self, key: &str, value: impl Into<Value>) -> CacheResult<Value> {
        self.client
            .get_set(key, value.into())
            .await?
            .ok_or(CacheError::KeyNotExist)
    }
}
