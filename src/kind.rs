//! Type tags for scalar targets and decoded JSON values.

use crate::json::Value;
use core::fmt::{self, Display};

/// The scalar type a document position must hold, as declared by the target
/// field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Boolean,
    Integer,
    Float,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [
        ScalarKind::String,
        ScalarKind::Boolean,
        ScalarKind::Integer,
        ScalarKind::Float,
    ];

    /// Name used for the expected type in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
        }
    }

    /// Whether `value` satisfies this kind without any coercion.
    ///
    /// The one laxity: an integer satisfies `Float`.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value.kind()) {
            (ScalarKind::String, ValueKind::String)
            | (ScalarKind::Boolean, ValueKind::Boolean)
            | (ScalarKind::Integer, ValueKind::Integer)
            | (ScalarKind::Float, ValueKind::Float)
            | (ScalarKind::Float, ValueKind::Integer) => true,
            _ => false,
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The JSON-level type of a decoded value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{Array, Object};

    #[test]
    fn float_accepts_integers() {
        assert!(ScalarKind::Float.accepts(&Value::from(50u64)));
        assert!(ScalarKind::Float.accepts(&Value::from(-3i64)));
        assert!(ScalarKind::Float.accepts(&Value::from(0.5)));
        assert!(!ScalarKind::Integer.accepts(&Value::from(42.0)));
    }

    #[test]
    fn nothing_else_crosses_kinds() {
        let values = [
            Value::Null,
            Value::Bool(false),
            Value::from("1"),
            Value::Array(Array::new()),
            Value::Object(Object::new()),
        ];
        for value in &values {
            assert!(!ScalarKind::Integer.accepts(value));
            assert!(!ScalarKind::Float.accepts(value));
        }
        assert!(!ScalarKind::String.accepts(&Value::Null));
        assert!(!ScalarKind::Boolean.accepts(&Value::from(1u64)));
    }
}
