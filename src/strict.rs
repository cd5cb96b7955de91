//! No-coercion checks for the four JSON scalar kinds.
//!
//! Each check hands the value back unchanged when its JSON type is exactly
//! the expected one, and fails with a [`TypeMismatchError`] otherwise. The
//! only laxity is that a JSON integer satisfies a float target.
//!
//! ```rust
//! use jayson_strict::json::Value;
//! use jayson_strict::strict;
//!
//! assert_eq!(strict::validate_float(&Value::from(50u64)).unwrap(), 50.0);
//!
//! let err = strict::validate_boolean(&Value::from(1u64)).unwrap_err();
//! assert_eq!(err.to_string(), "Expected boolean, but got integer: 1");
//! ```

use crate::error::{build_mismatch_error, Result, TypeMismatchError};
use crate::json::{Number, Value};
use crate::kind::ScalarKind;
use crate::path::Path;
use alloc::string::String;
use tracing::debug;

/// Checks that `value` is a JSON string.
pub fn validate_string(value: &Value) -> Result<String> {
    validate_string_at(value, &Path::root())
}

/// Checks that `value` is a JSON boolean.
pub fn validate_boolean(value: &Value) -> Result<bool> {
    validate_boolean_at(value, &Path::root())
}

/// Checks that `value` is a JSON integer.
pub fn validate_integer(value: &Value) -> Result<i128> {
    validate_integer_at(value, &Path::root())
}

/// Checks that `value` is a JSON float or integer.
pub fn validate_float(value: &Value) -> Result<f64> {
    validate_float_at(value, &Path::root())
}

pub fn validate_string_at(value: &Value, path: &Path) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(reject(ScalarKind::String, value, path)),
    }
}

pub fn validate_boolean_at(value: &Value, path: &Path) -> Result<bool> {
    match *value {
        Value::Bool(b) => Ok(b),
        _ => Err(reject(ScalarKind::Boolean, value, path)),
    }
}

/// The result is an `i128` so that every integer a decoder can produce, from
/// `i64::MIN` to `u64::MAX`, comes back exactly.
pub fn validate_integer_at(value: &Value, path: &Path) -> Result<i128> {
    match value {
        Value::Number(n) => match n.as_i128() {
            Some(n) => Ok(n),
            None => Err(reject(ScalarKind::Integer, value, path)),
        },
        _ => Err(reject(ScalarKind::Integer, value, path)),
    }
}

/// Integers are widened with `as f64`; magnitudes above 2^53 may round.
pub fn validate_float_at(value: &Value, path: &Path) -> Result<f64> {
    match *value {
        Value::Number(Number::F64(n)) => Ok(n),
        Value::Number(n) => Ok(n.as_f64()),
        _ => Err(reject(ScalarKind::Float, value, path)),
    }
}

/// Checks `value` against `kind` and returns it unchanged, except that an
/// integer checked as `Float` comes back as a float.
pub fn validate(value: &Value, kind: ScalarKind, path: &Path) -> Result<Value> {
    match kind {
        ScalarKind::String => validate_string_at(value, path).map(Value::String),
        ScalarKind::Boolean => validate_boolean_at(value, path).map(Value::Bool),
        ScalarKind::Integer => validate_integer_at(value, path).map(|_| value.clone()),
        ScalarKind::Float => validate_float_at(value, path).map(Value::from),
    }
}

fn reject(kind: ScalarKind, value: &Value, path: &Path) -> TypeMismatchError {
    debug_assert!(!kind.accepts(value));
    debug!(
        expected = kind.name(),
        actual = value.kind().name(),
        path = %path,
        "rejected JSON scalar in strict mode"
    );
    build_mismatch_error(kind, value, path)
}
