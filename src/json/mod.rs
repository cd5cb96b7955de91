//! Decoded JSON data.
//!
//! The strict layer never parses JSON text. It works on a [`Value`] that some
//! decoder already produced, and re-encodes values as compact JSON only to
//! describe them in error messages.

mod value;
pub use self::value::Value;

mod number;
pub use self::number::Number;

pub(crate) mod ser;

mod drop;

/// A JSON array.
pub type Array = alloc::vec::Vec<Value>;

/// A JSON object. Keys iterate in sorted order, which is also the order they
/// are rendered in.
pub type Object = alloc::collections::BTreeMap<alloc::string::String, Value>;
