use crate::json::{Array, Number, Object};
use crate::kind::ValueKind;
use alloc::string::String;
use core::fmt::{self, Display};

/// Any decoded JSON value.
///
/// This is what the host's JSON decoder hands to the strict layer. It is
/// never mutated by validation; a rejected value is reported back exactly as
/// it was received.
///
/// ```rust
/// use jayson_strict::json::{Number, Value};
/// use jayson_strict::kind::ValueKind;
///
/// let value = Value::Number(Number::U64(42));
/// assert_eq!(value.kind(), ValueKind::Integer);
/// assert_eq!(value.to_string(), "42");
/// ```
///
/// Cloning and dropping do not recurse, so arbitrarily deep documents can be
/// rejected, reported and freed without overflowing the stack.
///
/// ```rust
/// use jayson_strict::json::Value;
///
/// let mut value = Value::Null;
#[cfg_attr(not(miri), doc = "for _ in 0..100000 {")]
#[cfg_attr(miri, doc = "for _ in 0..40 {")]
///     value = Value::Array(vec![value]);
/// }
/// let copy = value.clone();
/// // no stack overflow when `value` and `copy` go out of scope
/// ```
#[derive(Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Array),
    Object(Object),
}

impl Default for Value {
    /// The default value is null.
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// The JSON-level type of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_integer() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Re-encodes the value as compact JSON text.
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        super::ser::write_value(&mut out, self);
        out
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_json_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::U64(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::F64(n))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}
