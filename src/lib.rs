//! Strict-mode checks for JSON scalars.
//!
//! Most JSON deserializers are lenient with loosely typed input: `"42"` is
//! accepted for an integer, `1` for a boolean. This crate refuses every such
//! coercion. A scalar must already have the JSON type its target declares,
//! with one exception: an integer literal satisfies a float target.
//!
//! The checks work on an already decoded [`json::Value`] and come in two
//! flavours:
//!
//! - the free functions in [`strict`], for hosts that drive their own
//!   traversal;
//! - the [`de::ScalarVisitor`] seam plus the [`de::Deserialize`] impls for
//!   std types, which keep track of where in the document a value sits.
//!
//! # Example
//!
//! ```rust
//! use jayson_strict::json::Value;
//!
//! # #[cfg(feature = "serde_json")]
//! # fn main() {
//! let doc: Value = serde_json::json!({ "asd": { "qwe": 42 } }).into();
//!
//! let result = jayson_strict::from_value::<std::collections::BTreeMap<
//!     String,
//!     std::collections::BTreeMap<String, String>,
//! >>(&doc);
//!
//! assert_eq!(
//!     result.unwrap_err().to_string(),
//!     r#"Expected property "asd.qwe" to be string, but got integer: 42"#,
//! );
//! # }
//! # #[cfg(not(feature = "serde_json"))]
//! # fn main() {}
//! ```
#![allow(
    // Pedantic.
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]

extern crate alloc;

mod error;
#[cfg(feature = "serde_json")]
mod serde_json;

pub mod de;
pub mod json;
pub mod kind;
pub mod path;
pub mod strict;

#[doc(inline)]
pub use crate::de::{from_value, from_value_with, Deserialize, ScalarVisitor, Strict};
pub use crate::error::{build_mismatch_error, Result, TypeMismatchError};
pub use crate::kind::{ScalarKind, ValueKind};
pub use crate::path::{Path, Segment};
pub use crate::strict::{validate_boolean, validate_float, validate_integer, validate_string};
