//! Affine maps of space.
//!
//! A [`Convertor3`] applies `output = warp * input + shift` with a [`Matrix3x3`]
//! warp and a [`Vector3`] shift, owned by value.
//!
//! ```
//! use geometry_core::{Convertor3, Matrix3x3, Vector3};
//!
//! let convertor = Convertor3::new(Matrix3x3::identity() * 2.0, Vector3::new(0.0, 0.0, 1.0));
//! let out = convertor.convert_vector(&Vector3::new(1.0, 2.0, 3.0));
//! assert_eq!(out, Vector3::new(2.0, 4.0, 7.0));
//! ```

use super::{Matrix3x3, Vector3};

/// Linear warp followed by a translation. `Default` maps everything to the origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Convertor3 {
    warp: Matrix3x3,
    shift: Vector3,
}

impl Convertor3 {
    pub fn new(warp: Matrix3x3, shift: Vector3) -> Self {
        Self { warp, shift }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3x3::identity(), Vector3::zero())
    }

    pub fn warp(&self) -> &Matrix3x3 {
        &self.warp
    }

    pub fn warp_mut(&mut self) -> &mut Matrix3x3 {
        &mut self.warp
    }

    pub fn shift(&self) -> &Vector3 {
        &self.shift
    }

    pub fn shift_mut(&mut self) -> &mut Vector3 {
        &mut self.shift
    }

    pub fn load_identity(&mut self) -> &mut Self {
        self.warp.load_identity();
        self.shift.set_to_zero();
        self
    }

    pub fn convert_vector(&self, vector: &Vector3) -> Vector3 {
        let mut result = self.warp.multiply_by_vector(vector);
        result.add_in_place(&self.shift);
        result
    }
}
