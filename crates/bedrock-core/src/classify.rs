//! Full-string classifiers over the compiled patterns.
//!
//! None of these fail: input that does not fit yields `false`, `None` or an
//! empty list. Deciding what to do with a rejected string is up to the caller.

use std::borrow::Cow;

use crate::patterns::{COMPARISON, INTEGER, INVALID_CHARS, NATURAL, NUMERIC, REAL, SLUG};

/// One or more ASCII digits, nothing else.
pub fn is_natural(s: &str) -> bool {
    NATURAL.is_match(s)
}

/// Optional leading `-`, then digits.
pub fn is_integer(s: &str) -> bool {
    INTEGER.is_match(s)
}

/// Optional leading `-`, digits, a `.`, then zero or more digits.
pub fn is_real(s: &str) -> bool {
    REAL.is_match(s)
}

/// Union of [`is_integer`] and [`is_real`].
pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Lowercase alphanumeric segments joined by single hyphens.
pub fn is_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

/// A comparison expression split at its first operator run.
///
/// Operands are not validated; `"a<=>b"` yields the operator `"<=>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub left: &'a str,
    pub operator: &'a str,
    pub right: &'a str,
}

impl<'a> Comparison<'a> {
    /// Split `s` into left operand, operator and right operand.
    ///
    /// ```
    /// use bedrock_core::classify::Comparison;
    ///
    /// let c = Comparison::parse("age>=18").unwrap();
    /// assert_eq!((c.left, c.operator, c.right), ("age", ">=", "18"));
    ///
    /// assert!(Comparison::parse("no operator here").is_none());
    /// ```
    pub fn parse(s: &'a str) -> Option<Self> {
        let caps = COMPARISON.captures(s)?;
        Some(Self {
            left: caps.get(1).map_or("", |m| m.as_str()),
            operator: caps.get(2)?.as_str(),
            right: caps.get(3).map_or("", |m| m.as_str()),
        })
    }
}

/// Every disallowed character with its byte offset, in order.
pub fn invalid_chars(s: &str) -> Vec<(usize, char)> {
    INVALID_CHARS
        .find_iter(s)
        .filter_map(|m| m.as_str().chars().next().map(|c| (m.start(), c)))
        .collect()
}

pub fn has_invalid_chars(s: &str) -> bool {
    INVALID_CHARS.is_match(s)
}

/// Remove every disallowed character. Borrows when nothing was removed.
pub fn strip_invalid_chars(s: &str) -> Cow<'_, str> {
    INVALID_CHARS.replace_all(s, "")
}
