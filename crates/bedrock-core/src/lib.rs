//! Format classifiers and helpers layered on the Bedrock null registry.
//!
//! This crate provides:
//!
//! - Full-string classifiers for natural, integer, real and numeric strings
//!   and slugs, plus comparison-expression splitting and a Unicode-aware
//!   invalid-character finder
//! - `chrono` conversions that refuse to mint the reserved null date
//! - Safe-integer checks against the published bounds
//! - Thin JSON, text, math and diagnostic pass-throughs
//!
//! # Quick Start
//!
//! ```
//! use bedrock_core::classify::{is_slug, Comparison};
//! use bedrock_core::{Format, NULL_DATE};
//!
//! assert!(is_slug("release-notes-2"));
//! assert!(Format::Numeric.matches("-3.14"));
//!
//! let cmp = Comparison::parse("age>=18").unwrap();
//! assert_eq!(cmp.operator, ">=");
//!
//! assert!(NULL_DATE.is_null());
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `BEDROCK_LOG` | `tracing` filter used by [`diag::init`] (default: `info`) |

pub mod calendar;
pub mod classify;
pub mod diag;
pub mod error;
pub mod format;
pub mod ids;
pub mod json;
pub mod math;
pub mod patterns;
pub mod safe;
pub mod text;

pub use bedrock_common as common;
pub use bedrock_common::{
    Date, DateTime, Time, DEG_TO_RAD, HALF_PI, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, NULL_DATE,
    NULL_DATETIME, NULL_TIME, NULL_TUID, NULL_UUID, PI, RAD_TO_DEG, TWO_PI,
};

// Re-export main types
pub use classify::{
    has_invalid_chars, invalid_chars, is_integer, is_natural, is_numeric, is_real, is_slug,
    strip_invalid_chars, Comparison,
};
pub use error::{PrimitiveError, PrimitiveResult};
pub use format::Format;
