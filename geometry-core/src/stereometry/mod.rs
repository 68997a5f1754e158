//! Solid geometry: 3D vectors, 3x3 matrices, affine convertors and rotations.
//!
//! - [`Vector3`]: `(x, y, z)` value with dot and cross products
//! - [`Matrix3x3`]: 1-based indexed 3x3 matrix with products and determinant
//! - [`Convertor3`]: affine map `warp * v + shift`
//! - [`Rotation3`]: axis and angle pair

mod convertor3;
mod matrix3x3;
mod rotation3;
mod vector3;

pub use convertor3::Convertor3;
pub use matrix3x3::Matrix3x3;
pub use rotation3::Rotation3;
pub use vector3::Vector3;
