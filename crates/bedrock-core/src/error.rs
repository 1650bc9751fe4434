//! Error type for the fallible helpers. Classifiers never produce one.

/// Errors raised by conversion and pass-through helpers.
#[derive(Debug, thiserror::Error)]
pub enum PrimitiveError {
    /// JSON text or value could not be encoded/decoded. Carries the
    /// underlying error untouched.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// A legitimate date collided with the reserved null date.
    #[error("date {date} is reserved as the null date")]
    ReservedNullDate { date: bedrock_common::Date },

    /// Time could not be represented with millisecond/microsecond fields.
    #[error("time {hour:02}:{minute:02}:{second:02} (+{nanosecond}ns) is not representable")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    },

    /// Integer outside the exactly-representable `f64` range.
    #[error("integer {value} is outside the safe range")]
    UnsafeInteger { value: i64 },

    /// Random range with no values to draw from (empty, NaN or unbounded).
    #[error("empty random range [{low}, {high})")]
    EmptyRange { low: f64, high: f64 },

    /// Name did not match any known format classifier.
    #[error("unknown format: {name}")]
    UnknownFormat { name: String },
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
