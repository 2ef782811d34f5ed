//! Type-erased cache payload.

use crate::error::{CacheError, CacheResult};

/// A stored cache payload.
///
/// The facade does not interpret payload semantics; callers pick the expected
/// representation at the call site through the typed accessors, each of which
/// fails with [`CacheError::TypeMismatch`] instead of panicking.
///
/// Note that Redis stores scalars textually, so a value written as
/// `Value::Int(42)` comes back from the real driver as `Value::Str("42")`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl Value {
    /// Name of the held representation, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
        }
    }

    /// Borrow the payload as a string slice.
    pub fn as_str(&self) -> CacheResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("str", other)),
        }
    }

    /// Read the payload as a signed integer.
    pub fn as_i64(&self) -> CacheResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(mismatch("int", other)),
        }
    }

    /// Read the payload as a float.
    pub fn as_f64(&self) -> CacheResult<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(mismatch("float", other)),
        }
    }

    /// Borrow the payload as a byte slice.
    pub fn as_bytes(&self) -> CacheResult<&[u8]> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(mismatch("bytes", other)),
        }
    }

    /// Consume the value, returning the owned string payload.
    pub fn into_string(self) -> CacheResult<String> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("str", &other)),
        }
    }

    /// Consume the value, returning the owned byte payload.
    pub fn into_bytes(self) -> CacheResult<Vec<u8>> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(mismatch("bytes", &other)),
        }
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> CacheError {
    CacheError::TypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}
