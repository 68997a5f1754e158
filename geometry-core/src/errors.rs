//! Error type for the geometry kernel.
//!
//! The kernel has one failure mode that is reported as an error: addressing a
//! matrix cell outside its 1-based range. Arithmetic edge cases are not errors.
//! Division by zero yields IEEE infinity or NaN, and normalising a zero vector
//! reports `false` from [`Vector2::normalize`](crate::Vector2::normalize).
//!
//! ```
//! use geometry_core::{GeometryError, Matrix2x2};
//!
//! let m = Matrix2x2::identity();
//! let err = m.get_item(0, 1).unwrap_err();
//! assert!(matches!(err, GeometryError::InvalidIndex { row: 0, col: 1, .. }));
//! ```

use thiserror::Error;

/// Failures raised by the geometry kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A matrix row or column was outside `1..=size`.
    #[error("Invalid index ({row}, {col}) for {matrix}: rows and columns must be in 1..={size}")]
    InvalidIndex {
        /// Name of the matrix type that rejected the index.
        matrix: &'static str,
        row: usize,
        col: usize,
        /// Matrix dimension; valid indices are `1..=size`.
        size: usize,
    },
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;

impl GeometryError {
    /// Creates an [`InvalidIndex`](Self::InvalidIndex) error.
    pub fn invalid_index(matrix: &'static str, row: usize, col: usize, size: usize) -> Self {
        Self::InvalidIndex {
            matrix,
            row,
            col,
            size,
        }
    }
}
