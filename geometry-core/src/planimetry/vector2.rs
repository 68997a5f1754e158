//! 2D Cartesian vectors.
//!
//! [`Vector2`] is a plain `(x, y)` value. Every arithmetic operation exists in a copy
//! form that returns a new vector and an `_in_place` form that overwrites the receiver:
//!
//! ```
//! use geometry_core::Vector2;
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = a.add(&Vector2::new(3.0, 4.0));
//! assert_eq!(a, Vector2::new(1.0, 2.0));
//! assert_eq!(b, Vector2::new(4.0, 6.0));
//!
//! let mut c = Vector2::new(3.0, 4.0);
//! assert!(c.normalize());
//! assert!(c.is_unit());
//! ```
//!
//! Equality is approximate: two vectors compare equal when every component passes
//! [`tolerance::are_equal`].

use crate::tolerance;
use std::fmt;

/// A 2D Cartesian vector.
///
/// Components are private; mutation only happens through the explicit setters and
/// `_in_place` methods of the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_values(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn set_to_zero(&mut self) -> &mut Self {
        self.set_values(0.0, 0.0)
    }

    /// Overwrites this vector's components with those of `source`.
    #[inline]
    pub fn copy_values_from(&mut self, source: &Vector2) -> &mut Self {
        self.x = source.x;
        self.y = source.y;
        self
    }

    /// Overwrites `destination`'s components with those of this vector.
    #[inline]
    pub fn copy_values_to(&self, destination: &mut Vector2) -> &Self {
        destination.x = self.x;
        destination.y = self.y;
        self
    }

    pub fn add(&self, other: &Vector2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn add_in_place(&mut self, other: &Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&self, other: &Vector2) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn subtract_in_place(&mut self, other: &Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn multiply(&self, value: f64) -> Self {
        Self::new(self.x * value, self.y * value)
    }

    pub fn multiply_in_place(&mut self, value: f64) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self
    }

    /// Divides each component by `value`. Division by zero is not trapped.
    pub fn divide(&self, value: f64) -> Self {
        Self::new(self.x / value, self.y / value)
    }

    pub fn divide_in_place(&mut self, value: f64) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self
    }

    /// Negates both components in place.
    pub fn revert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Returns the negated vector.
    pub fn reverted(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn scalar(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Dot product against raw components, without building a temporary vector.
    #[inline]
    pub fn scalar_xy(&self, x: f64, y: f64) -> f64 {
        self.x * x + self.y * y
    }

    #[inline]
    pub fn square_module(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length. Computed with `hypot`, so it stays finite for any finite
    /// vector even when [`square_module`](Self::square_module) overflows.
    #[inline]
    pub fn module(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        tolerance::is_zero(self.square_module())
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        tolerance::is_unit(self.square_module())
    }

    /// Scales the vector to unit length.
    ///
    /// Returns `false` and sets both components to zero when the vector is
    /// (near-)zero, since it has no direction to keep.
    pub fn normalize(&mut self) -> bool {
        let square_module = self.square_module();

        if tolerance::is_zero(square_module) {
            log::debug!(
                "Vector2::normalize: zero-length vector ({:e}, {:e}) reset to zero",
                self.x,
                self.y
            );
            self.set_to_zero();
            return false;
        }

        let module = self.module();
        self.x /= module;
        self.y /= module;
        true
    }

    /// Returns a normalized copy; see [`normalize`](Self::normalize).
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        tolerance::are_equal(self.x, other.x) && tolerance::are_equal(self.y, other.y)
    }
}

/// Vector + Vector
impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(&self, &rhs)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply(scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, vec: Vector2) -> Vector2 {
        vec.multiply(self)
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide(scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.reverted()
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(&rhs);
    }
}

impl std::ops::MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.multiply_in_place(scalar);
    }
}

impl std::ops::DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, scalar: f64) {
        self.divide_in_place(scalar);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:.9}, {:.9})", self.x, self.y)
    }
}
