//! Raw unit conversions between radians, degrees and gradians.
//!
//! These work on bare `f64` values and are exposed as associated functions on
//! [`Angle`] so callers do not need an instance:
//!
//! ```
//! use geometry_core::Angle;
//!
//! assert!((Angle::gradians_to_degrees(100.0) - 90.0).abs() < 1e-12);
//! assert!((Angle::degrees_to_gradians(90.0) - 100.0).abs() < 1e-12);
//! ```

use super::core::Angle;
use crate::constants::{DEGREES_IN_GRADIAN, DEGREES_IN_RADIAN, GRADIANS_IN_RADIAN};

impl Angle {
    #[inline]
    pub fn degrees_to_radians(deg: f64) -> f64 {
        deg / DEGREES_IN_RADIAN
    }

    #[inline]
    pub fn radians_to_degrees(rad: f64) -> f64 {
        rad * DEGREES_IN_RADIAN
    }

    #[inline]
    pub fn gradians_to_radians(grad: f64) -> f64 {
        grad / GRADIANS_IN_RADIAN
    }

    #[inline]
    pub fn radians_to_gradians(rad: f64) -> f64 {
        rad * GRADIANS_IN_RADIAN
    }

    /// Multiplies by 0.9.
    #[inline]
    pub fn gradians_to_degrees(grad: f64) -> f64 {
        grad * DEGREES_IN_GRADIAN
    }

    /// Divides by 0.9.
    #[inline]
    pub fn degrees_to_gradians(deg: f64) -> f64 {
        deg / DEGREES_IN_GRADIAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degree_radian_round_trip() {
        for &r in &[0.0, 1.0, -2.5, 1e-9, 123.456, -1e6] {
            let back = Angle::degrees_to_radians(Angle::radians_to_degrees(r));
            assert_abs_diff_eq!(back, r, epsilon = 1e-12 * r.abs().max(1.0));
        }
    }

    #[test]
    fn test_gradian_radian_round_trip() {
        for &r in &[0.0, 0.3, -7.0, 42.0] {
            let back = Angle::gradians_to_radians(Angle::radians_to_gradians(r));
            assert_abs_diff_eq!(back, r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_values() {
        assert_abs_diff_eq!(
            Angle::degrees_to_radians(180.0),
            std::f64::consts::PI,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(Angle::radians_to_degrees(std::f64::consts::PI), 180.0);
        assert_abs_diff_eq!(
            Angle::gradians_to_radians(200.0),
            std::f64::consts::PI,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            Angle::radians_to_gradians(std::f64::consts::FRAC_PI_2),
            100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gradian_degree_factor() {
        assert_eq!(Angle::gradians_to_degrees(400.0), 360.0);
        assert_abs_diff_eq!(Angle::degrees_to_gradians(360.0), 400.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Angle::degrees_to_gradians(Angle::gradians_to_degrees(123.0)),
            123.0,
            epsilon = 1e-12
        );
    }
}
