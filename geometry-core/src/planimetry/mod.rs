//! Plane geometry: 2D vectors, 2x2 matrices and affine convertors.
//!
//! - [`Vector2`]: `(x, y)` value with dot product, magnitude and normalisation
//! - [`Matrix2x2`]: 1-based indexed 2x2 matrix with products and determinant
//! - [`Convertor2`]: affine map `warp * v + shift`

mod convertor2;
mod matrix2x2;
mod vector2;

pub use convertor2::Convertor2;
pub use matrix2x2::Matrix2x2;
pub use vector2::Vector2;
