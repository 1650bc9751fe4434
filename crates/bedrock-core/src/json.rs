//! JSON encode/decode over `serde_json`. Errors are passed through as-is.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PrimitiveResult;

pub fn encode<T: Serialize + ?Sized>(value: &T) -> PrimitiveResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> PrimitiveResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> PrimitiveResult<T> {
    serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "json decode failed");
        e.into()
    })
}

/// Decode into an untyped [`serde_json::Value`].
pub fn decode_value(text: &str) -> PrimitiveResult<serde_json::Value> {
    decode(text)
}
