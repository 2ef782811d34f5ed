//! Redis-backed command client using a bb8 connection pool.

use std::time::Duration;

use async_trait::async_trait;
use bb8::{Pool, PooledConnection};
use redis::Client;
use redis::aio::MultiplexedConnection;

use crate::config::RedisConfig;
use crate::error::{CacheError, CacheResult};
use crate::traits::CommandClient;
use crate::value::Value;

type RedisPool = Pool<Client>;

/// Redis-backed [`CommandClient`] with a bb8 connection pool.
pub struct RedisClient {
    pool: RedisPool,
    key_prefix: String,
}

impl RedisClient {
    pub async fn new(config: &RedisConfig) -> CacheResult<Self> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| CacheError::Connection(e.to_string()))?;

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout))
            .build(client)
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        Ok(Self {
            pool,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn prefixed_key(&self, key: &str) -> String {
        prefixed(&self.key_prefix, key)
    }

    async fn get_conn(&self) -> CacheResult<PooledConnection<'_, Client>> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))
    }
}

fn prefixed(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}:{key}")
    }
}

fn encode_arg(cmd: &mut redis::Cmd, value: &Value) {
    match value {
        Value::Str(s) => cmd.arg(s),
        Value::Int(n) => cmd.arg(*n),
        Value::Float(f) => cmd.arg(*f),
        Value::Bytes(b) => cmd.arg(&b[..]),
    };
}

/// Decode a raw reply; the nil reply is the driver's "key absent" signal
/// and stays untranslated here, the facade owns the sentinel mapping.
fn decode_reply(reply: redis::Value) -> CacheResult<Option<Value>> {
    match reply {
        redis::Value::Nil => Ok(None),
        redis::Value::Int(n) => Ok(Some(Value::Int(n))),
        redis::Value::Double(f) => Ok(Some(Value::Float(f))),
        redis::Value::SimpleString(s) => Ok(Some(Value::Str(s))),
        redis::Value::BulkString(bytes) => Ok(Some(match String::from_utf8(bytes) {
            Ok(s) => Value::Str(s),
            Err(e) => Value::Bytes(e.into_bytes()),
        })),
        other => Err(CacheError::Driver(redis::RedisError::from((
            redis::ErrorKind::UnexpectedReturnType,
            "unsupported reply type",
            format!("{other:?}"),
        )))),
    }
}

#[async_trait]
impl CommandClient for RedisClient {
    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> CacheResult<()> {
        let mut conn = self.get_conn().await?;
        let prefixed = self.prefixed_key(key);
        tracing::debug!(key = %prefixed, ttl = ?ttl, "SET");

        let mut cmd = redis::cmd("SET");
        cmd.arg(&prefixed);
        encode_arg(&mut cmd, &value);
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(ttl.as_millis() as u64);
        }

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        cmd.query_async::<()>(conn_ref).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Option<Value>> {
        let mut conn = self.get_conn().await?;
        let prefixed = self.prefixed_key(key);
        tracing::debug!(key = %prefixed, "GET");

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let reply: redis::Value = redis::cmd("GET").arg(&prefixed).query_async(conn_ref).await?;
        decode_reply(reply)
    }

    async fn set_nx(&self, key: &str, value: Value, ttl: Option<Duration>) -> CacheResult<bool> {
        let mut conn = self.get_conn().await?;
        let prefixed = self.prefixed_key(key);
        tracing::debug!(key = %prefixed, ttl = ?ttl, "SET NX");

        // Atomic conditional set; SETNX followed by EXPIRE could be split
        // by a crash between the two commands.
        let mut cmd = redis::cmd("SET");
        cmd.arg(&prefixed);
        encode_arg(&mut cmd, &value);
        cmd.arg("NX");
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(ttl.as_millis() as u64);
        }

        // OK reply means newly set, nil means the key already existed.
        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let reply: redis::Value = cmd.query_async(conn_ref).await?;
        Ok(!matches!(reply, redis::Value::Nil))
    }

    async fn get_set(&self, key: &str, value: Value) -> CacheResult<Option<Value>> {
        let mut conn = self.get_conn().await?;
        let prefixed = self.prefixed_key(key);
        tracing::debug!(key = %prefixed, "GETSET");

        let mut cmd = redis::cmd("GETSET");
        cmd.arg(&prefixed);
        encode_arg(&mut cmd, &value);

        let conn_ref: &mut MultiplexedConnection = &mut conn;
        let reply: redis::Value = cmd.query_async(conn_ref).await?;
        decode_reply(reply)
    }
}
