//! Classifier names usable from configuration files.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PrimitiveError;
use crate::patterns;

/// A full-string format classifier, addressable by name.
///
/// Serializes as `natural`, `integer`, `real`, `numeric` or `slug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Natural,
    Integer,
    Real,
    Numeric,
    Slug,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Natural,
        Format::Integer,
        Format::Real,
        Format::Numeric,
        Format::Slug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Numeric => "numeric",
            Self::Slug => "slug",
        }
    }

    /// The compiled pattern behind this format.
    pub fn regex(&self) -> &'static Regex {
        match self {
            Self::Natural => &patterns::NATURAL,
            Self::Integer => &patterns::INTEGER,
            Self::Real => &patterns::REAL,
            Self::Numeric => &patterns::NUMERIC,
            Self::Slug => &patterns::SLUG,
        }
    }

    pub fn matches(&self, s: &str) -> bool {
        self.regex().is_match(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PrimitiveError::UnknownFormat {
                name: s.to_string(),
            })
    }
}
