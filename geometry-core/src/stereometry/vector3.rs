//! 3D Cartesian vectors.
//!
//! [`Vector3`] mirrors [`Vector2`](crate::Vector2) one dimension up and adds the cross
//! product, [`vector_multiply`](Vector3::vector_multiply).
//!
//! # Dot and Cross Products
//!
//! ```
//! use geometry_core::Vector3;
//!
//! let x = Vector3::x_axis();
//! let y = Vector3::y_axis();
//!
//! assert_eq!(x.scalar(&y), 0.0);
//! assert_eq!(x.vector_multiply(&y), Vector3::z_axis());  // right-hand rule
//! ```
//!
//! # Normalisation
//!
//! [`normalize`](Vector3::normalize) reports whether the vector had a direction to keep.
//! A (near-)zero vector is reset to exactly zero and the call returns `false`:
//!
//! ```
//! use geometry_core::Vector3;
//!
//! let mut v = Vector3::new(0.0, 3.0, 4.0);
//! assert!(v.normalize());
//! assert!(v.is_unit());
//!
//! let mut z = Vector3::zero();
//! assert!(!z.normalize());
//! assert!(z.is_zero());
//! ```

use crate::tolerance;
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are private; mutation only happens through the explicit setters and
/// `_in_place` methods of the same value. Equality is approximate, component by
/// component, via [`tolerance::are_equal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `(0, 0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
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
    pub fn z(&self) -> f64 {
        self.z
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
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    #[inline]
    pub fn set_values(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[inline]
    pub fn set_to_zero(&mut self) -> &mut Self {
        self.set_values(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn copy_values_from(&mut self, source: &Vector3) -> &mut Self {
        self.x = source.x;
        self.y = source.y;
        self.z = source.z;
        self
    }

    #[inline]
    pub fn copy_values_to(&self, destination: &mut Vector3) -> &Self {
        destination.x = self.x;
        destination.y = self.y;
        destination.z = self.z;
        self
    }

    pub fn add(&self, other: &Vector3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn add_in_place(&mut self, other: &Vector3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    pub fn subtract(&self, other: &Vector3) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn subtract_in_place(&mut self, other: &Vector3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    pub fn multiply(&self, value: f64) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value)
    }

    pub fn multiply_in_place(&mut self, value: f64) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self.z *= value;
        self
    }

    pub fn divide(&self, value: f64) -> Self {
        Self::new(self.x / value, self.y / value, self.z / value)
    }

    pub fn divide_in_place(&mut self, value: f64) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self.z /= value;
        self
    }

    pub fn revert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    pub fn reverted(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn scalar(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Dot product against raw components.
    #[inline]
    pub fn scalar_xyz(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x * x + self.y * y + self.z * z
    }

    /// Cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs, oriented by the right-hand rule.
    pub fn vector_multiply(&self, other: &Vector3) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Replaces `self` with `self × other`.
    pub fn vector_multiply_in_place(&mut self, other: &Vector3) -> &mut Self {
        *self = self.vector_multiply(other);
        self
    }

    #[inline]
    pub fn square_module(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    ///
    /// Falls back to rescaling by the largest component when the squared module
    /// overflows, so any finite vector has a finite length.
    pub fn module(&self) -> f64 {
        let square_module = self.square_module();
        if square_module.is_finite() {
            return libm::sqrt(square_module);
        }

        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if !scale.is_finite() {
            return scale;
        }

        let (x, y, z) = (self.x / scale, self.y / scale, self.z / scale);
        scale * libm::sqrt(x * x + y * y + z * z)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        tolerance::is_zero(self.square_module())
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        tolerance::is_unit(self.square_module())
    }

    /// Scales the vector to unit length, returning `false` (and zeroing it) when the
    /// vector is too short to have a direction.
    pub fn normalize(&mut self) -> bool {
        let square_module = self.square_module();

        if tolerance::is_zero(square_module) {
            log::debug!(
                "Vector3::normalize: zero-length vector ({:e}, {:e}, {:e}) reset to zero",
                self.x,
                self.y,
                self.z
            );
            self.set_to_zero();
            return false;
        }

        let module = self.module();
        self.x /= module;
        self.y /= module;
        self.z /= module;
        true
    }

    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        tolerance::are_equal(self.x, other.x)
            && tolerance::are_equal(self.y, other.y)
            && tolerance::are_equal(self.z, other.z)
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(&self, &rhs)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply(scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.multiply(self)
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide(scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.reverted()
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(&rhs);
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.multiply_in_place(scalar);
    }
}

/// Vector /= scalar
impl std::ops::DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        self.divide_in_place(scalar);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
