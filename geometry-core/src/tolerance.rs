//! Epsilon bands and the approximate comparisons built on them.
//!
//! Every predicate in the crate that needs to decide "is this zero", "is this a unit
//! length" or "are these two numbers the same" goes through this module, so the
//! thresholds are defined exactly once.
//!
//! | Constant | Value | Used by |
//! |----------|-------|---------|
//! | [`POSITIVE_EPSILON`] / [`NEGATIVE_EPSILON`] | ±1e-15 | [`is_unit`], absolute branch of [`are_equal`] |
//! | [`POSITIVE_SQUARE_EPSILON`] / [`NEGATIVE_SQUARE_EPSILON`] | ±1e-30 | [`is_zero`] |
//! | [`LOW_EPSILON`] / [`HIGH_EPSILON`] | 1 ∓ 1e-15 | relative branch of [`are_equal`] |
//!
//! # Comparing floats
//!
//! [`are_equal`] switches strategy on the magnitude of the reference value `b`:
//!
//! - `|b| <= HIGH_EPSILON`: the difference `b - a` must lie in the absolute band
//!   `[NEGATIVE_EPSILON, POSITIVE_EPSILON]`.
//! - otherwise: the ratio `a / b` must lie in `[LOW_EPSILON, HIGH_EPSILON]`.
//!   `b` is known to be non-zero on this branch, so the division cannot trap.
//!
//! ```
//! use geometry_core::tolerance::are_equal;
//!
//! assert!(are_equal(0.1 + 0.2, 0.3));
//! assert!(are_equal(1.0e20 * (1.0 + 1.0e-16), 1.0e20));
//! assert!(!are_equal(1.0, 1.0 + 1.0e-12));
//! ```

pub const POSITIVE_EPSILON: f64 = 1e-15;
pub const NEGATIVE_EPSILON: f64 = -1e-15;

pub const POSITIVE_SQUARE_EPSILON: f64 = 1e-30;
pub const NEGATIVE_SQUARE_EPSILON: f64 = -1e-30;

#[allow(clippy::excessive_precision)]
pub const HIGH_EPSILON: f64 = 1.000000000000001;
#[allow(clippy::excessive_precision)]
pub const LOW_EPSILON: f64 = 0.999999999999999;

/// Returns `true` when a squared magnitude is small enough to call the vector zero.
#[inline]
pub fn is_zero(square_magnitude: f64) -> bool {
    square_magnitude <= POSITIVE_SQUARE_EPSILON
}

/// Returns `true` when a squared magnitude is within [`POSITIVE_EPSILON`] of one.
#[inline]
pub fn is_unit(square_magnitude: f64) -> bool {
    let difference = square_magnitude - 1.0;
    (NEGATIVE_EPSILON..=POSITIVE_EPSILON).contains(&difference)
}

/// Approximate equality of `a` against the reference value `b`.
///
/// Small references are compared by absolute difference, large ones by ratio.
/// Identical values, infinities included, are always equal; NaN is never equal
/// to anything. Because `b` picks the branch, the relation is
/// not strictly symmetric near the crossover at `|b| == HIGH_EPSILON`.
#[inline]
pub fn are_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    if (-HIGH_EPSILON..=HIGH_EPSILON).contains(&b) {
        let difference = b - a;
        return (NEGATIVE_EPSILON..=POSITIVE_EPSILON).contains(&difference);
    }

    let relation = a / b;
    (LOW_EPSILON..=HIGH_EPSILON).contains(&relation)
}
