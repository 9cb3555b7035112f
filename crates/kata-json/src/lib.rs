//! JSON bridge for the kata crates.
//!
//! Two operations:
//! - [`encode`] writes any `Serialize` value as JSON text, keeping object
//!   keys in insertion order.
//! - [`decode`] parses JSON text and lays its fields over a blank value of
//!   the same kind as a template (see [`Overlay`]).
//!
//! [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259) is the reference for
//! the text format. Non-finite floats have no JSON spelling and are written
//! as `null`, as conventional encoders do.

mod error;
mod overlay;
mod record;

pub use error::{DecodeError, EncodeError};
pub use overlay::Overlay;
pub use record::Record;

use kata_common::warning::warn_once;
use serde::Serialize;
pub use serde_json::{Map, Value};

/// Encode `value` as compact JSON text.
///
/// # Errors
///
/// Returns [`EncodeError::Unrepresentable`] if `value` contains a map with
/// non-string keys or its `Serialize` impl fails.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(value)?)
}

/// Encode `value` as JSON text indented by two spaces.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse JSON text into a plain value tree.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if `text` is not well-formed JSON.
pub fn decode_value(text: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse `text` and copy its fields onto a blank value of `template`'s kind.
///
/// The template's own field values are never read. Objects supply their
/// keys in document order, arrays their indices (`"0"`, `"1"`, ...), and
/// scalars nothing, so a scalar payload yields the blank value unchanged.
/// A field the kind cannot hold is dropped with a warning.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if `text` is not well-formed JSON.
pub fn decode<T: Overlay>(template: &T, text: &str) -> Result<T, DecodeError> {
    let parsed = decode_value(text)?;
    let mut value = template.blank();
    for (name, field) in own_fields(parsed) {
        if !value.apply_field(&name, field) {
            warn_once(
                "JSON",
                &format!("field '{name}' dropped: template kind holds no such field"),
            );
        }
    }
    Ok(value)
}

fn own_fields(parsed: Value) -> Vec<(String, Value)> {
    match parsed {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => Vec::new(),
    }
}
