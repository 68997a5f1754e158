//! Affine maps of the plane.
//!
//! A [`Convertor2`] applies `output = warp * input + shift`, where the warp is a
//! [`Matrix2x2`] and the shift a [`Vector2`]. Both parts are owned by value, so two
//! convertors never share state and a clone is always a deep copy.
//!
//! ```
//! use geometry_core::{Convertor2, Vector2};
//!
//! let mut convertor = Convertor2::identity();
//! convertor.shift_mut().set_values(5.0, 5.0);
//!
//! let moved = convertor.convert_vector(&Vector2::new(1.0, 1.0));
//! assert_eq!(moved, Vector2::new(6.0, 6.0));
//! ```

use super::{Matrix2x2, Vector2};

/// Linear warp followed by a translation.
///
/// `Default` has a zero warp and a zero shift, mapping every vector to the origin.
/// Use [`identity`](Self::identity) or [`load_identity`](Self::load_identity) to
/// start from the identity map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Convertor2 {
    warp: Matrix2x2,
    shift: Vector2,
}

impl Convertor2 {
    pub fn new(warp: Matrix2x2, shift: Vector2) -> Self {
        Self { warp, shift }
    }

    /// The identity map: identity warp, zero shift.
    pub fn identity() -> Self {
        Self::new(Matrix2x2::identity(), Vector2::zero())
    }

    pub fn warp(&self) -> &Matrix2x2 {
        &self.warp
    }

    pub fn warp_mut(&mut self) -> &mut Matrix2x2 {
        &mut self.warp
    }

    pub fn shift(&self) -> &Vector2 {
        &self.shift
    }

    pub fn shift_mut(&mut self) -> &mut Vector2 {
        &mut self.shift
    }

    /// Resets the warp to identity and the shift to zero.
    pub fn load_identity(&mut self) -> &mut Self {
        self.warp.load_identity();
        self.shift.set_to_zero();
        self
    }

    /// Returns `warp * vector + shift` as a new vector.
    pub fn convert_vector(&self, vector: &Vector2) -> Vector2 {
        let mut result = self.warp.multiply_by_vector(vector);
        result.add_in_place(&self.shift);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_to_origin() {
        let c = Convertor2::default();
        assert_eq!(c.warp(), &Matrix2x2::zero());
        assert_eq!(c.shift(), &Vector2::zero());
        assert_eq!(c.convert_vector(&Vector2::new(3.0, -4.0)), Vector2::zero());
    }

    #[test]
    fn test_load_identity_resets_both_parts() {
        let mut c = Convertor2::new(
            Matrix2x2::new(1.0, 2.0, 3.0, 4.0),
            Vector2::new(9.0, 9.0),
        );
        c.load_identity();
        assert_eq!(c, Convertor2::identity());
        assert_eq!(c.convert_vector(&Vector2::new(1.5, 2.5)), Vector2::new(1.5, 2.5));
    }

    #[test]
    fn test_convert_vector_translation() {
        let c = Convertor2::new(Matrix2x2::identity(), Vector2::new(5.0, 5.0));
        let input = Vector2::new(1.0, 1.0);
        assert_eq!(c.convert_vector(&input).to_array(), [6.0, 6.0]);
        assert_eq!(input.to_array(), [1.0, 1.0]);
    }

    #[test]
    fn test_convert_vector_full_affine() {
        // 90° turn then a shift of (1, 0)
        let c = Convertor2::new(Matrix2x2::new(0.0, -1.0, 1.0, 0.0), Vector2::new(1.0, 0.0));
        let r = c.convert_vector(&Vector2::new(2.0, 3.0));
        assert_eq!(r.to_array(), [-2.0, 2.0]);
    }

    #[test]
    fn test_convert_vector_leaves_convertor_untouched() {
        let c = Convertor2::new(Matrix2x2::new(2.0, 0.0, 0.0, 2.0), Vector2::new(1.0, 1.0));
        let before = c.clone();
        c.convert_vector(&Vector2::new(4.0, 4.0));
        assert_eq!(c, before);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Convertor2::new(Matrix2x2::identity(), Vector2::new(1.0, 2.0));
        let mut copy = original.clone();

        copy.warp_mut().set_item(1, 1, 10.0).unwrap();
        copy.shift_mut().set_x(-7.0);

        assert_eq!(original.warp().get_item(1, 1).unwrap(), 1.0);
        assert_eq!(original.shift().x(), 1.0);
        assert_eq!(copy.warp().get_item(1, 1).unwrap(), 10.0);
        assert_eq!(copy.shift().x(), -7.0);
    }
}
