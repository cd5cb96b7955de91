use crate::json::Value;
use crate::kind::ValueKind;
use crate::path::Path;
use alloc::string::{String, ToString};
use core::fmt::{self, Display};
use thiserror::Error;

/// A JSON value did not have the type its target requires.
///
/// The message names the expected type, the JSON type actually found and
/// the offending value as compact JSON:
///
/// ```text
/// Expected integer, but got string: "42"
/// Expected property "asd.qwe" to be string, but got integer: 42
/// ```
///
/// The second form is used whenever the mismatch happened below the document
/// root.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Expected {}, but got {}: {}", expectation(.expected, .path), kind_of(.actual), .actual)]
pub struct TypeMismatchError {
    expected: String,
    actual: Value,
    path: Path,
}

/// Result type returned by the strict validators.
pub type Result<T> = core::result::Result<T, TypeMismatchError>;

impl TypeMismatchError {
    /// Mismatch at the document root.
    pub fn from_value(expected: impl Display, actual: &Value) -> Self {
        build_mismatch_error(expected, actual, &Path::root())
    }

    /// Display name of the type that was expected.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// JSON type of the rejected value.
    pub fn actual_kind(&self) -> ValueKind {
        self.actual.kind()
    }

    /// The rejected value, exactly as it was passed in.
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    /// Where in the document the rejected value sits. Empty for the root.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builds the error describing why `actual` does not satisfy `expected`.
///
/// `expected` is only used for display, so hosts can report their own kinds
/// (enums, dates, bounded integers) in the same format as the built-in
/// scalar checks.
pub fn build_mismatch_error(expected: impl Display, actual: &Value, path: &Path) -> TypeMismatchError {
    TypeMismatchError {
        expected: expected.to_string(),
        actual: actual.clone(),
        path: path.clone(),
    }
}

fn kind_of(value: &Value) -> ValueKind {
    value.kind()
}

fn expectation<'a>(expected: &'a str, path: &'a Path) -> Expectation<'a> {
    Expectation { expected, path }
}

struct Expectation<'a> {
    expected: &'a str,
    path: &'a Path,
}

impl Display for Expectation<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_root() {
            formatter.write_str(self.expected)
        } else {
            write!(formatter, "property \"{}\" to be {}", self.path, self.expected)
        }
    }
}
