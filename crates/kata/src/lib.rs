//! One entry point for the three kata facilities.
//!
//! # Scope
//!
//! - **Shapes** - [`create_rectangle`] and its derived area
//! - **JSON** - [`encode_to_text`] and the template-shaped
//!   [`decode_from_text`]
//! - **Selectors** - [`new_selector_builder`] and [`combine`]
//!
//! The facilities share nothing; each is also reachable as a module
//! ([`shapes`], [`json`], [`selector`]) for its full API.

pub use kata_common as common;
pub use kata_json as json;
pub use kata_selector as selector;
pub use kata_shapes as shapes;

pub use kata_json::{DecodeError, EncodeError, Overlay, Record};
pub use kata_selector::{
    Combinator, FragmentKind, SelectorBuilder, SelectorError, combine, new_selector_builder,
};
pub use kata_shapes::{Rectangle, create_rectangle};

use serde::Serialize;

/// Encode any serializable value as JSON text.
///
/// # Errors
///
/// Returns [`EncodeError`] if the value has no JSON representation.
pub fn encode_to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    kata_json::encode(value)
}

/// Decode `text` into a fresh value of the same kind as `template`.
///
/// # Errors
///
/// Returns [`DecodeError`] if `text` is not well-formed JSON.
pub fn decode_from_text<T: Overlay>(template: &T, text: &str) -> Result<T, DecodeError> {
    kata_json::decode(template, text)
}
