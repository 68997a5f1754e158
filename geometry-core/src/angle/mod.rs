//! Typed angles.
//!
//! [`Angle`] stores radians and converts to degrees or gradians on demand.
//! Arithmetic comes in a copy form returning a new angle and an `_in_place` form
//! that mutates the receiver; the std operators delegate to those.
//!
//! ```
//! use geometry_core::angle::deg;
//!
//! let mut a = deg(30.0);
//! a.add_degrees_in_place(60.0);
//! assert!((a.degrees() - 90.0).abs() < 1e-12);
//! ```

mod convert;
mod core;
mod ops;

pub use self::core::Angle;
pub use self::core::{deg, grad, rad};
