//! Multiples of π and angular unit conversion factors.
//!
//! These are plain `f64` values. The typed equivalents live on
//! [`Angle`](crate::Angle) as associated constants.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const THREE_HALVES_PI: f64 = 4.7123889803846898576939649;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Degrees in one radian: 180/π.
pub const DEGREES_IN_RADIAN: f64 = 180.0 / PI;

/// Gradians in one radian: 200/π.
pub const GRADIANS_IN_RADIAN: f64 = 200.0 / PI;

/// Degrees in one gradian (a right angle is 90° or 100 gon).
pub const DEGREES_IN_GRADIAN: f64 = 0.9;
