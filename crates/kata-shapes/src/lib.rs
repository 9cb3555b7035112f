//! Shape value objects.
//!
//! A [`Rectangle`] stores its two sides and derives its area on every call,
//! so the area always reflects the current fields.

use std::ops::Mul;

use kata_json::{Map, Overlay, Value};
use serde::Serialize;

/// A rectangle with public, caller-mutable sides.
///
/// Serializes as `{"width": .., "height": ..}` followed by any extra fields
/// that decoding laid over it. The area is derived, never stored, and so is
/// not part of the encoded form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rectangle<T = f64> {
    /// Horizontal side.
    pub width: T,
    /// Vertical side.
    pub height: T,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<T> Rectangle<T> {
    /// A rectangle with the given sides and no extra fields.
    #[must_use]
    pub fn new(width: T, height: T) -> Self {
        Self {
            width,
            height,
            extra: Map::new(),
        }
    }

    /// Fields other than the two sides, in the order they were written.
    ///
    /// Only decoding adds to these, and never under `width` or `height`.
    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl<T: Mul<Output = T> + Copy> Rectangle<T> {
    /// `width * height`, computed from the current sides.
    ///
    /// With floating-point sides, NaN or infinite inputs propagate as the
    /// multiplication dictates.
    #[must_use]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

/// Build a rectangle. Any side type that multiplies is accepted; nothing is
/// validated.
#[must_use]
pub fn create_rectangle<T>(width: T, height: T) -> Rectangle<T> {
    Rectangle::new(width, height)
}

/// Decoding a rectangle starts from the zero rectangle. `width` and
/// `height` take numeric values; every other field lands in `extra`.
impl Overlay for Rectangle<f64> {
    fn blank(&self) -> Self {
        Self::default()
    }

    fn apply_field(&mut self, name: &str, value: Value) -> bool {
        match name {
            "width" => self.width = to_number(&value),
            "height" => self.height = to_number(&value),
            _ => {
                let _ = self.extra.insert(name.to_owned(), value);
            }
        }
        true
    }
}

/// Numeric reading of a JSON value, following loose-typed coercion:
/// `null` is 0, booleans are 0 or 1, strings are read by [`string_to_number`],
/// and arrays or objects are NaN.
fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// [ECMA-262 § 7.1.4.1.1 StringToNumber](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// Blank is 0. `Infinity` (case-sensitive, optionally signed) is infinite.
/// `0x`, `0o` and `0b` prefixes read unsigned integers in that radix.
/// Otherwise only a decimal literal parses; words such as `inf` or `nan`
/// are NaN.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_integer(&trimmed[2..], radix);
    }

    let decimal = !unsigned.starts_with(['+', '-'])
        && unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if decimal {
        unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
    } else {
        f64::NAN
    }
}

/// Digits in `radix`, accumulated as a float so long literals lose
/// precision instead of overflowing.
fn radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN)
}
