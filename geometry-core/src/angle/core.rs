//! Core angle type.
//!
//! [`Angle`] stores a single `f64` in radians. Degrees and gradians are views computed
//! on demand and are never stored, so there is exactly one source of truth:
//!
//! - `degrees() == radians() * 180/π`
//! - `gradians() == radians() * 200/π`
//!
//! No wrapping into `[0, 2π)` happens anywhere. An angle of 7π stays 7π.
//!
//! # Copy and in-place forms
//!
//! Every mutation comes in two flavours. The plain name returns a new angle and leaves
//! the receiver alone. The `_in_place` name writes into the receiver and hands back
//! `&mut Self` so calls can be chained:
//!
//! ```
//! use geometry_core::Angle;
//!
//! let a = Angle::from_degrees(30.0);
//! let b = a.add_degrees(15.0);
//! assert!((a.degrees() - 30.0).abs() < 1e-12);
//! assert!((b.degrees() - 45.0).abs() < 1e-12);
//!
//! let mut c = Angle::from_degrees(10.0);
//! c.add_degrees_in_place(80.0).multiply_in_place(2.0);
//! assert!((c.degrees() - 180.0).abs() < 1e-12);
//! ```
//!
//! # Gradians
//!
//! A full turn is 400 gradians (gon), so a right angle is 100 gon:
//!
//! ```
//! use geometry_core::Angle;
//!
//! let right = Angle::from_gradians(100.0);
//! assert!((right.degrees() - 90.0).abs() < 1e-12);
//! ```

use crate::constants::{
    DEGREES_IN_RADIAN, GRADIANS_IN_RADIAN, HALF_PI, PI, THREE_HALVES_PI, TWOPI,
};
use crate::tolerance;

/// An angular measurement stored as radians.
///
/// `PartialEq` and `PartialOrd` compare the raw radian values. Use
/// [`approx_eq`](Self::approx_eq) for a tolerance-aware comparison.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// π/2 radians (90 degrees).
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// π radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// 3π/2 radians (270 degrees).
    pub const THREE_HALVES_PI: Self = Self { rad: THREE_HALVES_PI };

    /// 2π radians (a full turn).
    pub const TWO_PI: Self = Self { rad: TWOPI };

    /// Creates an angle from radians. Same as [`from_radians`](Self::from_radians).
    #[inline]
    pub const fn new(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: Self::degrees_to_radians(deg),
        }
    }

    /// Creates an angle from gradians (400 per full turn).
    #[inline]
    pub fn from_gradians(grad: f64) -> Self {
        Self {
            rad: Self::gradians_to_radians(grad),
        }
    }

    /// Returns the angle in radians.
    ///
    /// This is the internal representation, so no conversion occurs.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * DEGREES_IN_RADIAN
    }

    /// Returns the angle in gradians.
    #[inline]
    pub fn gradians(self) -> f64 {
        self.rad * GRADIANS_IN_RADIAN
    }

    #[inline]
    pub fn set_radians(&mut self, rad: f64) -> &mut Self {
        self.rad = rad;
        self
    }

    #[inline]
    pub fn set_degrees(&mut self, deg: f64) -> &mut Self {
        self.rad = Self::degrees_to_radians(deg);
        self
    }

    #[inline]
    pub fn set_gradians(&mut self, grad: f64) -> &mut Self {
        self.rad = Self::gradians_to_radians(grad);
        self
    }

    /// Overwrites this angle with the value of `source`.
    #[inline]
    pub fn copy_value_from(&mut self, source: &Angle) -> &mut Self {
        self.rad = source.rad;
        self
    }

    /// Overwrites `destination` with the value of this angle.
    #[inline]
    pub fn copy_value_to(&self, destination: &mut Angle) -> &Self {
        destination.rad = self.rad;
        self
    }

    pub fn add(&self, other: Angle) -> Self {
        Self::from_radians(self.rad + other.rad)
    }

    pub fn add_in_place(&mut self, other: Angle) -> &mut Self {
        self.rad += other.rad;
        self
    }

    pub fn add_radians(&self, rad: f64) -> Self {
        Self::from_radians(self.rad + rad)
    }

    pub fn add_radians_in_place(&mut self, rad: f64) -> &mut Self {
        self.rad += rad;
        self
    }

    pub fn add_degrees(&self, deg: f64) -> Self {
        Self::from_radians(self.rad + Self::degrees_to_radians(deg))
    }

    pub fn add_degrees_in_place(&mut self, deg: f64) -> &mut Self {
        self.rad += Self::degrees_to_radians(deg);
        self
    }

    pub fn add_gradians(&self, grad: f64) -> Self {
        Self::from_radians(self.rad + Self::gradians_to_radians(grad))
    }

    pub fn add_gradians_in_place(&mut self, grad: f64) -> &mut Self {
        self.rad += Self::gradians_to_radians(grad);
        self
    }

    pub fn subtract(&self, other: Angle) -> Self {
        Self::from_radians(self.rad - other.rad)
    }

    pub fn subtract_in_place(&mut self, other: Angle) -> &mut Self {
        self.rad -= other.rad;
        self
    }

    pub fn subtract_radians(&self, rad: f64) -> Self {
        Self::from_radians(self.rad - rad)
    }

    pub fn subtract_radians_in_place(&mut self, rad: f64) -> &mut Self {
        self.rad -= rad;
        self
    }

    pub fn subtract_degrees(&self, deg: f64) -> Self {
        Self::from_radians(self.rad - Self::degrees_to_radians(deg))
    }

    pub fn subtract_degrees_in_place(&mut self, deg: f64) -> &mut Self {
        self.rad -= Self::degrees_to_radians(deg);
        self
    }

    pub fn subtract_gradians(&self, grad: f64) -> Self {
        Self::from_radians(self.rad - Self::gradians_to_radians(grad))
    }

    pub fn subtract_gradians_in_place(&mut self, grad: f64) -> &mut Self {
        self.rad -= Self::gradians_to_radians(grad);
        self
    }

    pub fn multiply(&self, value: f64) -> Self {
        Self::from_radians(self.rad * value)
    }

    pub fn multiply_in_place(&mut self, value: f64) -> &mut Self {
        self.rad *= value;
        self
    }

    /// Divides the angle by `value`. Division by zero yields ±inf or NaN.
    pub fn divide(&self, value: f64) -> Self {
        Self::from_radians(self.rad / value)
    }

    pub fn divide_in_place(&mut self, value: f64) -> &mut Self {
        self.rad /= value;
        self
    }

    /// Negates the angle in place.
    pub fn revert(&mut self) -> &mut Self {
        self.rad = -self.rad;
        self
    }

    /// Returns the negated angle.
    pub fn reverted(&self) -> Self {
        Self::from_radians(-self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Returns the cotangent, `1 / tan`.
    ///
    /// Not guarded: at multiples of π the result is ±inf (or a huge finite value,
    /// since `tan(π)` is not exactly zero in floating point).
    #[inline]
    pub fn cot(self) -> f64 {
        1.0 / self.rad.tan()
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Tolerance-aware equality of the radian values, see [`tolerance::are_equal`].
    #[inline]
    pub fn approx_eq(self, other: Angle) -> bool {
        tolerance::are_equal(self.rad, other.rad)
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// ```
/// use geometry_core::angle::deg;
///
/// let angle = deg(45.0);
/// assert!((angle.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Creates an angle from gradians. Shorthand for [`Angle::from_gradians`].
#[inline]
pub fn grad(v: f64) -> Angle {
    Angle::from_gradians(v)
}
