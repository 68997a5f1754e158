//! Arithmetic operators for [`Angle`].
//!
//! `+`, `-`, `*`, `/` and unary `-` go through the copy forms. The compound
//! assignment operators go through the `_in_place` forms.

use super::core::Angle;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::add(&self, rhs)
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

/// Angle * scalar → Angle
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        self.multiply(k)
    }
}

/// Angle / scalar → Angle
impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        self.divide(k)
    }
}

/// -Angle → Angle
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        self.reverted()
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(rhs);
    }
}

impl MulAssign<f64> for Angle {
    #[inline]
    fn mul_assign(&mut self, k: f64) {
        self.multiply_in_place(k);
    }
}

impl DivAssign<f64> for Angle {
    #[inline]
    fn div_assign(&mut self, k: f64) {
        self.divide_in_place(k);
    }
}
