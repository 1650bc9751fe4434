//! Compiled classifier patterns.
//!
//! The numeric family uses `[0-9]` rather than `\d`: `\d` is Unicode-aware in
//! `regex` and would accept digits from other scripts.

use lazy_static::lazy_static;
use regex::Regex;

pub const NATURAL_SOURCE: &str = r"^[0-9]+$";
pub const INTEGER_SOURCE: &str = r"^-?[0-9]+$";
pub const REAL_SOURCE: &str = r"^-?[0-9]+\.[0-9]*$";
pub const NUMERIC_SOURCE: &str = r"^-?[0-9]+(?:\.[0-9]*)?$";
pub const SLUG_SOURCE: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";
/// Lazy left operand, a run of `<`, `=`, `>`, then whatever remains.
pub const COMPARISON_SOURCE: &str = r"^(.*?)([<=>]+)(.*)$";
/// Anything that is not a letter, number, `-`, `_` or `.` in any script.
pub const INVALID_CHARS_SOURCE: &str = r"[^\p{L}\p{N}\-_.]";

lazy_static! {
    pub static ref NATURAL: Regex = Regex::new(NATURAL_SOURCE).unwrap();
    pub static ref INTEGER: Regex = Regex::new(INTEGER_SOURCE).unwrap();
    pub static ref REAL: Regex = Regex::new(REAL_SOURCE).unwrap();
    pub static ref NUMERIC: Regex = Regex::new(NUMERIC_SOURCE).unwrap();
    pub static ref SLUG: Regex = Regex::new(SLUG_SOURCE).unwrap();
    /// Groups: 1 = left operand, 2 = operator, 3 = right operand.
    pub static ref COMPARISON: Regex = Regex::new(COMPARISON_SOURCE).unwrap();
    pub static ref INVALID_CHARS: Regex = Regex::new(INVALID_CHARS_SOURCE).unwrap();
}
