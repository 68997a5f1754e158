//! 2x2 matrices.
//!
//! Cells are addressed by 1-based `(row, column)` pairs, matching the usual
//! mathematical `r{row}c{col}` naming:
//!
//! ```text
//! | r1c1 r1c2 |
//! | r2c1 r2c2 |
//! ```
//!
//! Internally the four cells live in a flat row-major array, which is not exposed.
//! Out-of-range indices are rejected with
//! [`GeometryError::InvalidIndex`](crate::GeometryError::InvalidIndex), never clamped.
//!
//! ```
//! use geometry_core::{Matrix2x2, Vector2};
//!
//! let m = Matrix2x2::new(2.0, 0.0, 0.0, 3.0);
//! assert_eq!(m.get_item(2, 2).unwrap(), 3.0);
//! assert_eq!(m.multiply_by_vector(&Vector2::new(1.0, 1.0)), Vector2::new(2.0, 3.0));
//! assert_eq!(m.determinant(), 6.0);
//! ```

use super::Vector2;
use crate::errors::{GeometryError, GeometryResult};
use crate::tolerance;
use std::fmt;

const SIZE: usize = 2;

/// A 2x2 matrix of `f64` cells.
///
/// `Default` is the zero matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix2x2 {
    cells: [f64; SIZE * SIZE],
}

impl Matrix2x2 {
    /// Creates a matrix from its named cells, row by row.
    #[inline]
    pub fn new(r1c1: f64, r1c2: f64, r2c1: f64, r2c2: f64) -> Self {
        Self {
            cells: [r1c1, r1c2, r2c1, r2c2],
        }
    }

    /// Creates a matrix from rows: `rows[0]` is row 1.
    #[inline]
    pub fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    fn offset(row: usize, col: usize) -> GeometryResult<usize> {
        if (1..=SIZE).contains(&row) && (1..=SIZE).contains(&col) {
            return Ok((row - 1) * SIZE + (col - 1));
        }

        log::debug!("Matrix2x2: rejected cell index ({}, {})", row, col);
        Err(GeometryError::invalid_index("Matrix2x2", row, col, SIZE))
    }

    /// Returns the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidIndex`] if `row` or `col` is outside `1..=2`.
    pub fn get_item(&self, row: usize, col: usize) -> GeometryResult<f64> {
        Ok(self.cells[Self::offset(row, col)?])
    }

    /// Sets the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidIndex`] if `row` or `col` is outside `1..=2`.
    /// The matrix is left untouched in that case.
    pub fn set_item(&mut self, row: usize, col: usize, value: f64) -> GeometryResult<()> {
        let offset = Self::offset(row, col)?;
        self.cells[offset] = value;
        Ok(())
    }

    pub fn load_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    pub fn load_zero(&mut self) -> &mut Self {
        self.cells = [0.0; SIZE * SIZE];
        self
    }

    pub fn copy_values_from(&mut self, source: &Matrix2x2) -> &mut Self {
        self.cells = source.cells;
        self
    }

    pub fn copy_values_to(&self, destination: &mut Matrix2x2) -> &Self {
        destination.cells = self.cells;
        self
    }

    fn zip_with(&self, other: &Matrix2x2, op: impl Fn(f64, f64) -> f64) -> Self {
        let mut cells = self.cells;
        for (cell, rhs) in cells.iter_mut().zip(other.cells.iter()) {
            *cell = op(*cell, *rhs);
        }
        Self { cells }
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        Self {
            cells: self.cells.map(op),
        }
    }

    pub fn add(&self, other: &Matrix2x2) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn add_in_place(&mut self, other: &Matrix2x2) -> &mut Self {
        *self = Matrix2x2::add(self, other);
        self
    }

    pub fn subtract(&self, other: &Matrix2x2) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn subtract_in_place(&mut self, other: &Matrix2x2) -> &mut Self {
        *self = self.subtract(other);
        self
    }

    pub fn multiply_by_scalar(&self, value: f64) -> Self {
        self.map(|a| a * value)
    }

    pub fn multiply_by_scalar_in_place(&mut self, value: f64) -> &mut Self {
        *self = self.multiply_by_scalar(value);
        self
    }

    /// Divides every cell by `value`. Division by zero is not trapped.
    pub fn divide(&self, value: f64) -> Self {
        self.map(|a| a / value)
    }

    pub fn divide_in_place(&mut self, value: f64) -> &mut Self {
        *self = self.divide(value);
        self
    }

    /// Computes `M * v`: each output component is one row of `M` dotted with `v`.
    pub fn multiply_by_vector(&self, vector: &Vector2) -> Vector2 {
        let [r1c1, r1c2, r2c1, r2c2] = self.cells;
        Vector2::new(
            r1c1 * vector.x() + r1c2 * vector.y(),
            r2c1 * vector.x() + r2c2 * vector.y(),
        )
    }

    /// Computes the matrix product `self * other`.
    pub fn multiply_by_matrix(&self, other: &Matrix2x2) -> Self {
        let [a11, a12, a21, a22] = self.cells;
        let [b11, b12, b21, b22] = other.cells;
        Self::new(
            a11 * b11 + a12 * b21,
            a11 * b12 + a12 * b22,
            a21 * b11 + a22 * b21,
            a21 * b12 + a22 * b22,
        )
    }

    /// Replaces `self` with `self * other`.
    pub fn multiply_by_matrix_in_place(&mut self, other: &Matrix2x2) -> &mut Self {
        *self = self.multiply_by_matrix(other);
        self
    }

    /// `r1c1 * r2c2 - r1c2 * r2c1`.
    pub fn determinant(&self) -> f64 {
        let [r1c1, r1c2, r2c1, r2c2] = self.cells;
        r1c1 * r2c2 - r1c2 * r2c1
    }
}

impl PartialEq for Matrix2x2 {
    fn eq(&self, other: &Self) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| tolerance::are_equal(*a, *b))
    }
}

impl std::ops::Add for Matrix2x2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix2x2::add(&self, &rhs)
    }
}

impl std::ops::Sub for Matrix2x2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul<f64> for Matrix2x2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply_by_scalar(scalar)
    }
}

impl std::ops::Div<f64> for Matrix2x2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide(scalar)
    }
}

impl std::ops::Mul for Matrix2x2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply_by_matrix(&rhs)
    }
}

impl std::ops::Mul<&Matrix2x2> for &Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: &Matrix2x2) -> Matrix2x2 {
        self.multiply_by_matrix(rhs)
    }
}

impl std::ops::Mul<Vector2> for Matrix2x2 {
    type Output = Vector2;

    fn mul(self, vec: Vector2) -> Vector2 {
        self.multiply_by_vector(&vec)
    }
}

impl std::ops::Mul<Vector2> for &Matrix2x2 {
    type Output = Vector2;

    fn mul(self, vec: Vector2) -> Vector2 {
        self.multiply_by_vector(&vec)
    }
}

impl std::ops::AddAssign for Matrix2x2 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::SubAssign for Matrix2x2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(&rhs);
    }
}

impl std::ops::MulAssign<f64> for Matrix2x2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.multiply_by_scalar_in_place(scalar);
    }
}

impl std::ops::MulAssign for Matrix2x2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_by_matrix_in_place(&rhs);
    }
}

impl std::ops::DivAssign<f64> for Matrix2x2 {
    fn div_assign(&mut self, scalar: f64) {
        self.divide_in_place(scalar);
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix2x2:")?;
        for row in self.cells.chunks(SIZE) {
            writeln!(f, "  [{:12.9} {:12.9}]", row[0], row[1])?;
        }
        Ok(())
    }
}
