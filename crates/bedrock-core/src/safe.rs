//! Checks against the published safe-integer bounds. Opt-in: nothing in the
//! layer clamps values on its own.

use bedrock_common::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};

use crate::error::{PrimitiveError, PrimitiveResult};

pub fn is_safe_integer(value: i64) -> bool {
    (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

/// Finite, without fractional part, and inside the safe bounds.
pub fn is_safe_f64(value: f64) -> bool {
    value.is_finite()
        && value.trunc() == value
        && value >= MIN_SAFE_INTEGER as f64
        && value <= MAX_SAFE_INTEGER as f64
}

pub fn ensure_safe(value: i64) -> PrimitiveResult<i64> {
    if is_safe_integer(value) {
        Ok(value)
    } else {
        tracing::debug!(value, "integer outside safe range");
        Err(PrimitiveError::UnsafeInteger { value })
    }
}
