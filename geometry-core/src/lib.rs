//! Small 2D and 3D geometry kernel on `f64`.
//!
//! `geometry-core` provides typed angles, vectors, square matrices and affine
//! convertors for the plane and for space, with every approximate comparison routed
//! through one set of epsilon bands.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tolerance`] | Epsilon constants, `is_zero`, `is_unit`, `are_equal` |
//! | [`angle`] | [`Angle`] in radians with degree and gradian conversion |
//! | [`planimetry`] | [`Vector2`], [`Matrix2x2`], [`Convertor2`] |
//! | [`stereometry`] | [`Vector3`], [`Matrix3x3`], [`Convertor3`], [`Rotation3`] |
//! | [`constants`] | Multiples of π and unit conversion factors |
//! | [`errors`] | [`GeometryError`] and [`GeometryResult`] |
//!
//! # Re-exports
//!
//! ```
//! use geometry_core::{Angle, Vector2, Matrix2x2, Convertor2};
//! use geometry_core::{Vector3, Matrix3x3, Convertor3, Rotation3};
//! use geometry_core::{GeometryError, GeometryResult};
//! ```
//!
//! # Design Notes
//!
//! - **Copy and in-place forms**: `v.add(&w)` returns a new value and leaves `v`
//!   alone; `v.add_in_place(&w)` mutates `v` and returns `&mut Self` for chaining.
//!   The std operators (`+`, `+=`, ...) are thin wrappers over these.
//!
//! - **Approximate equality**: `==` on vectors and matrices compares each component
//!   with [`tolerance::are_equal`]. `Angle` compares raw radians; use
//!   [`Angle::approx_eq`] for tolerance.
//!
//! - **1-based matrix indices**: `get_item(row, col)` accepts `1..=N` and returns
//!   [`GeometryError::InvalidIndex`] for anything else.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod planimetry;
pub mod stereometry;
pub mod tolerance;

pub use angle::Angle;
pub use errors::{GeometryError, GeometryResult};
pub use planimetry::{Convertor2, Matrix2x2, Vector2};
pub use stereometry::{Convertor3, Matrix3x3, Rotation3, Vector3};
