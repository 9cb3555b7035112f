//! Template kinds that `decode` can populate.

use serde_json::{Map, Value};

/// A kind of value that can be rebuilt from parsed JSON fields.
///
/// Decoding never runs a kind's own constructor with the parsed data. It
/// asks the template for an empty value of the same kind, then writes the
/// parsed fields onto it one at a time.
pub trait Overlay: Sized {
    /// A default value of the same kind (or enum variant) as `self`.
    ///
    /// Implementations must not copy field values out of `self`.
    #[must_use]
    fn blank(&self) -> Self;

    /// Write `value` into the field called `name`, replacing any default.
    ///
    /// Returns `false` when this kind has nowhere to keep the field.
    fn apply_field(&mut self, name: &str, value: Value) -> bool;
}

/// Plain JSON values keep their variant: an object template yields an
/// object, an array template an array, and so on.
impl Overlay for Value {
    fn blank(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Bool(_) => Self::Bool(false),
            Self::Number(_) => Self::from(0),
            Self::String(_) => Self::String(String::new()),
            Self::Array(_) => Self::Array(Vec::new()),
            Self::Object(_) => Self::Object(Map::new()),
        }
    }

    fn apply_field(&mut self, name: &str, value: Value) -> bool {
        match self {
            Self::Object(map) => {
                let _ = map.insert(name.to_owned(), value);
                true
            }
            // An index may overwrite an element or append one; anything
            // further out would leave holes and is refused.
            Self::Array(items) => match array_index(name) {
                Some(index) if index < items.len() => {
                    items[index] = value;
                    true
                }
                Some(index) if index == items.len() => {
                    items.push(value);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}

/// `name` as an array index, if it is written the canonical way: decimal
/// digits, no sign, no leading zero.
fn array_index(name: &str) -> Option<usize> {
    let canonical =
        name == "0" || (!name.starts_with('0') && name.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        name.parse().ok()
    } else {
        None
    }
}
