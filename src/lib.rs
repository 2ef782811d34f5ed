//! Thin facade over a Redis-compatible cache driver.
//!
//! Normalizes raw driver outcomes into a stable [`Value`] payload type and a
//! closed [`CacheError`] taxonomy, so callers never depend on driver-native
//! types. The driver sits behind the [`CommandClient`] capability trait;
//! [`RedisClient`] is the production implementation, and tests substitute a
//! hand-written double.
//!
//! The facade is stateless and safe for concurrent use: every operation is a
//! single round trip with no retries and no local caching. The only domain
//! sentinel it introduces is [`CacheError::KeyNotExist`], produced when a
//! read path hits the driver's "key absent" reply; every other driver error
//! passes through unchanged.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use recache::{Cache, CacheError, RedisClient, RedisConfig};
//!
//! # async fn demo() -> Result<(), CacheError> {
//! let client = RedisClient::new(&RedisConfig::default()).await?;
//! let cache = Cache::new(Arc::new(client));
//!
//! cache.set("name", "大明", Some(Duration::from_secs(60))).await?;
//! match cache.get("name").await {
//!     Ok(value) => println!("{}", value.as_str()?),
//!     Err(CacheError::KeyNotExist) => println!("no such key"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod config;
mod error;
mod redis;
mod traits;
mod value;

pub use cache::Cache;
pub use config::RedisConfig;
pub use error::{CacheError, CacheResult};
pub use self::redis::RedisClient;
pub use traits::CommandClient;
pub use value::Value;
