//! Caller-side input validation.
//!
//! The solver performs no checks of its own, so everything reaching it must
//! already be a non-negative integer.  A volume is accepted only when its
//! text is one or more ASCII digits: no sign, no decimal point, no
//! surrounding whitespace.

use serde_json::Value;
use thiserror::Error;

/// Rejected solver input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// `field` is not a non-negative integer that fits in a `u64`.
    #[error("invalid {field}: '{value}' is not a non-negative integer")]
    Invalid { field: &'static str, value: String },
}

/// Parses one volume.
///
/// # Errors
///
/// Returns [`InputError::Invalid`] unless `value` is all ASCII digits and
/// fits in a `u64`.
pub fn parse_volume(field: &'static str, value: &str) -> Result<u64, InputError> {
    let invalid = || InputError::Invalid {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

/// Validates the three solver arguments: jug X capacity, jug Y capacity,
/// and the volume to measure.
///
/// # Errors
///
/// Returns the first [`InputError`] encountered, checking `x`, `y`, then `z`.
pub fn validate_args(x: &str, y: &str, z: &str) -> Result<(u64, u64, u64), InputError> {
    Ok((
        parse_volume("x", x)?,
        parse_volume("y", y)?,
        parse_volume("z", z)?,
    ))
}

/// Textual form of a JSON request value, used for validation.
///
/// Strings are taken as-is; anything else uses its JSON text, so `-1`, `2.5`
/// and `true` all fail the digit check.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
