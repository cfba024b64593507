//! Common helpers for spherical projection math (longitude wrapping, clamped roots).

use std::f64::consts::{PI, TAU};

/// Wrap a longitude into `[-π, π]`.
///
/// Values already in range are returned untouched so that `±π` survive as-is.
pub fn adjust_lon(lon: f64) -> f64 {
    if (-PI..=PI).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + PI).rem_euclid(TAU) - PI;
    // rem_euclid can land exactly on -π for inputs that were +π + 2kπ
    if wrapped == -PI && lon > 0.0 {
        PI
    } else {
        wrapped
    }
}

/// Square root that returns 0 for non-positive input instead of NaN.
pub fn asqrt(x: f64) -> f64 {
    if x > 0.0 {
        x.sqrt()
    } else {
        0.0
    }
}

/// Arcsine with the argument clamped to `[-1, 1]`.
pub fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_adjust_lon_in_range() {
        assert_relative_eq!(adjust_lon(0.5), 0.5);
        assert_relative_eq!(adjust_lon(PI), PI);
        assert_relative_eq!(adjust_lon(-PI), -PI);
    }

    #[test]
    fn test_adjust_lon_wraps() {
        assert_relative_eq!(adjust_lon(PI + 0.25), -PI + 0.25, epsilon = 1e-12);
        assert_relative_eq!(adjust_lon(-PI - 0.25), PI - 0.25, epsilon = 1e-12);
        assert_relative_eq!(adjust_lon(3.0 * TAU + 1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_asqrt_negative_is_zero() {
        assert_eq!(asqrt(-1e-17), 0.0);
        assert_relative_eq!(asqrt(4.0), 2.0);
    }

    #[test]
    fn test_asin_clamped() {
        // Rounding can push sin-derived values just past 1
        assert_relative_eq!(asin_clamped(1.0 + 1e-15), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(asin_clamped(-2.0), -std::f64::consts::FRAC_PI_2);
    }
}
