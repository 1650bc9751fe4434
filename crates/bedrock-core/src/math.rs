//! Numeric pass-throughs over `f64` and `rand`. Semantics are those of the
//! standard library methods they call (`round` rounds half away from zero).

use bedrock_common::{DEG_TO_RAD, RAD_TO_DEG};
use rand::Rng;

use crate::error::{PrimitiveError, PrimitiveResult};

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

pub fn round(x: f64) -> f64 {
    x.round()
}

pub fn trunc(x: f64) -> f64 {
    x.trunc()
}

pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn pow(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn tan(x: f64) -> f64 {
    x.tan()
}

pub fn asin(x: f64) -> f64 {
    x.asin()
}

pub fn acos(x: f64) -> f64 {
    x.acos()
}

pub fn atan(x: f64) -> f64 {
    x.atan()
}

pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Uniform in `[0, 1)`.
pub fn random() -> f64 {
    rand::thread_rng().gen::<f64>()
}

/// Uniform in `[low, high)`. The range must be non-empty and its width
/// finite; NaN bounds never qualify.
pub fn random_range(low: f64, high: f64) -> PrimitiveResult<f64> {
    if low.is_nan() || high.is_nan() || low >= high || !(high - low).is_finite() {
        tracing::debug!(low, high, "rejecting empty random range");
        return Err(PrimitiveError::EmptyRange { low, high });
    }
    Ok(rand::thread_rng().gen_range(low..high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_common::{HALF_PI, PI};

    #[test]
    fn rounding_follows_std() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(floor(-1.2), -2.0);
        assert_eq!(ceil(-1.2), -1.0);
        assert_eq!(trunc(-1.8), -1.0);
    }

    #[test]
    fn angle_conversion() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_degrees(HALF_PI) - 90.0).abs() < 1e-12);
        assert!((sin(HALF_PI) - 1.0).abs() < 1e-12);
        assert!((atan2(1.0, 1.0) - to_radians(45.0)).abs() < 1e-12);
    }

    #[test]
    fn min_max_ignore_nan() {
        assert_eq!(min(f64::NAN, 1.0), 1.0);
        assert_eq!(max(2.0, f64::NAN), 2.0);
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert_eq!(sqrt(81.0), 9.0);
        assert_eq!(abs(-0.5), 0.5);
    }

    #[test]
    fn random_stays_in_range() {
        for _ in 0..1_000 {
            let r = random();
            assert!((0.0..1.0).contains(&r));
            let s = random_range(-5.0, 5.0).unwrap();
            assert!((-5.0..5.0).contains(&s));
        }
    }

    #[test]
    fn random_range_rejects_unusable_bounds() {
        for (low, high) in [
            (1.0, 1.0),
            (2.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
            (f64::NEG_INFINITY, 0.0),
            (f64::MIN, f64::MAX),
        ] {
            assert!(
                matches!(random_range(low, high), Err(PrimitiveError::EmptyRange { .. })),
                "[{low}, {high}) should be rejected"
            );
        }
    }
}
