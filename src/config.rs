//! Driver construction settings.

use serde::{Deserialize, Serialize};

/// Redis connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Prefix applied to every key; empty disables prefixing
    #[serde(default)]
    pub key_prefix: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            connection_timeout: default_connection_timeout(),
            key_prefix: String::new(),
        }
    }
}

fn default_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_pool_size() -> u32 {
    4
}

fn default_connection_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_config_defaults() {
        let config = RedisConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.connection_timeout, 5);
        assert_eq!(config.key_prefix, "");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: RedisConfig = toml::from_str(
            r#"
            url = "redis://cache.internal:6380"
            key_prefix = "app"
            "#,
        )
        .unwrap();
        assert_eq!(config.url, "redis://cache.internal:6380");
        assert_eq!(config.key_prefix, "app");
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.connection_timeout, 5);
    }
}
