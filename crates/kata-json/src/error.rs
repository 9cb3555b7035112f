//! Errors raised while moving values to and from JSON text.

use thiserror::Error;

/// A value could not be written as JSON.
///
/// Owned Rust values cannot be cyclic, so the only failures left are values
/// the format has no spelling for: map keys that are not strings, or a
/// `Serialize` impl that reports its own error.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// [RFC 8259 § 4](https://www.rfc-editor.org/rfc/rfc8259#section-4)
    /// "A name is a string."
    #[error("value cannot be represented as JSON: {0}")]
    Unrepresentable(#[from] serde_json::Error),
}

/// JSON text could not be parsed.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not well-formed JSON.
    #[error("malformed JSON at line {line}, column {column}: {source}")]
    Malformed {
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Malformed {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
