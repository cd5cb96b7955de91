//! Typed deserialization on top of the strict checks.
//!
//! A host walks its target type and the decoded document together and asks
//! a [`ScalarVisitor`] to check every scalar leaf. [`Strict`] is the visitor
//! that refuses coercions; hosts with their own policy can plug in another
//! implementation without touching the traversal.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use jayson_strict::de::from_value;
//! use jayson_strict::json::{Object, Value};
//!
//! let mut user = Object::new();
//! user.insert("age".into(), Value::from("42"));
//! let mut doc = Object::new();
//! doc.insert("user".into(), Value::Object(user));
//!
//! let err = from_value::<BTreeMap<String, BTreeMap<String, u32>>>(&Value::Object(doc)).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"Expected property "user.age" to be integer, but got string: "42""#,
//! );
//! ```

mod impls;

use crate::error::TypeMismatchError;
use crate::json::Value;
use crate::path::Path;
use crate::strict;
use alloc::string::String;
use core::fmt::Display;

/// Per-kind checks a host calls for each scalar leaf.
///
/// `path` is the location of `value` in the document and is only used to
/// describe failures.
pub trait ScalarVisitor {
    type Error;

    fn visit_string(&self, value: &Value, path: &Path) -> Result<String, Self::Error>;

    fn visit_boolean(&self, value: &Value, path: &Path) -> Result<bool, Self::Error>;

    fn visit_integer(&self, value: &Value, path: &Path) -> Result<i128, Self::Error>;

    fn visit_float(&self, value: &Value, path: &Path) -> Result<f64, Self::Error>;

    /// Error for kinds the visitor does not know about: containers, bounded
    /// integers, or host-defined types.
    fn mismatch(&self, expected: &dyn Display, value: &Value, path: &Path) -> Self::Error;
}

/// The no-coercion visitor.
#[derive(Copy, Clone, Debug, Default)]
pub struct Strict;

impl ScalarVisitor for Strict {
    type Error = TypeMismatchError;

    fn visit_string(&self, value: &Value, path: &Path) -> Result<String, Self::Error> {
        strict::validate_string_at(value, path)
    }

    fn visit_boolean(&self, value: &Value, path: &Path) -> Result<bool, Self::Error> {
        strict::validate_boolean_at(value, path)
    }

    fn visit_integer(&self, value: &Value, path: &Path) -> Result<i128, Self::Error> {
        strict::validate_integer_at(value, path)
    }

    fn visit_float(&self, value: &Value, path: &Path) -> Result<f64, Self::Error> {
        strict::validate_float_at(value, path)
    }

    fn mismatch(&self, expected: &dyn Display, value: &Value, path: &Path) -> Self::Error {
        crate::error::build_mismatch_error(expected, value, path)
    }
}

/// Trait for types that can be built from a decoded JSON value.
pub trait Deserialize: Sized {
    /// Builds `Self` from `value`, which sits at `path` in the document.
    ///
    /// Implementations that descend into children push a segment onto
    /// `path` before the call and pop it after.
    fn deserialize_from_value<V: ScalarVisitor>(
        value: &Value,
        visitor: &V,
        path: &mut Path,
    ) -> Result<Self, V::Error>;
}

/// Deserializes `T` from `value` in strict mode.
pub fn from_value<T: Deserialize>(value: &Value) -> Result<T, TypeMismatchError> {
    from_value_with(value, &Strict)
}

/// Deserializes `T` from `value`, checking scalars with `visitor`.
///
/// The first failure aborts the whole call.
pub fn from_value_with<T: Deserialize, V: ScalarVisitor>(
    value: &Value,
    visitor: &V,
) -> Result<T, V::Error> {
    let mut path = Path::root();
    T::deserialize_from_value(value, visitor, &mut path)
}
