//! Integer range within which `f64` arithmetic stays exact, plus the angle
//! factors derived from π.

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as IEEE-754 doubles: 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = (1i64 << 53) - 1;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;
pub const PI: f64 = core::f64::consts::PI;
pub const TWO_PI: f64 = core::f64::consts::TAU;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// ---------------------------
// Compile-time bound checks
// ---------------------------

const _: () = assert!(MAX_SAFE_INTEGER == 9_007_199_254_740_991);
const _: () = assert!(MIN_SAFE_INTEGER == -9_007_199_254_740_991);
