//! 3x3 matrices.
//!
//! Same contract as [`Matrix2x2`](crate::Matrix2x2), one size up. Rows and columns
//! are 1-based, and anything outside `1..=3` is an
//! [`InvalidIndex`](crate::GeometryError::InvalidIndex) error.
//!
//! # Storage Layout
//!
//! Cells are stored row-major in a flat `[f64; 9]`. Multiplying a column vector
//! is the standard row-by-column product, each cell used exactly once:
//!
//! ```text
//! | r1c1 r1c2 r1c3 |   | x |   | r1c1*x + r1c2*y + r1c3*z |
//! | r2c1 r2c2 r2c3 | * | y | = | r2c1*x + r2c2*y + r2c3*z |
//! | r3c1 r3c2 r3c3 |   | z |   | r3c1*x + r3c2*y + r3c3*z |
//! ```
//!
//! ```
//! use geometry_core::{Matrix3x3, Vector3};
//!
//! let mut m = Matrix3x3::identity();
//! m.set_item(1, 3, 2.0).unwrap();
//!
//! let v = m.multiply_by_vector(&Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(v, Vector3::new(3.0, 1.0, 1.0));
//! assert!(m.get_item(4, 1).is_err());
//! ```

use super::Vector3;
use crate::errors::{GeometryError, GeometryResult};
use crate::tolerance;
use std::fmt;

const SIZE: usize = 3;

/// A 3x3 matrix of `f64` cells. `Default` is the zero matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix3x3 {
    cells: [f64; SIZE * SIZE],
}

impl Matrix3x3 {
    /// Creates a matrix from its named cells, row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        r1c1: f64,
        r1c2: f64,
        r1c3: f64,
        r2c1: f64,
        r2c2: f64,
        r2c3: f64,
        r3c1: f64,
        r3c2: f64,
        r3c3: f64,
    ) -> Self {
        Self {
            cells: [r1c1, r1c2, r1c3, r2c1, r2c2, r2c3, r3c1, r3c2, r3c3],
        }
    }

    /// Creates a matrix from rows: `rows[0]` is row 1.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let mut cells = [0.0; SIZE * SIZE];
        for (chunk, row) in cells.chunks_mut(SIZE).zip(rows.iter()) {
            chunk.copy_from_slice(row);
        }
        Self { cells }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    fn offset(row: usize, col: usize) -> GeometryResult<usize> {
        if (1..=SIZE).contains(&row) && (1..=SIZE).contains(&col) {
            return Ok((row - 1) * SIZE + (col - 1));
        }

        log::debug!("Matrix3x3: rejected cell index ({}, {})", row, col);
        Err(GeometryError::invalid_index("Matrix3x3", row, col, SIZE))
    }

    /// Returns the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidIndex`] if `row` or `col` is outside `1..=3`.
    pub fn get_item(&self, row: usize, col: usize) -> GeometryResult<f64> {
        Ok(self.cells[Self::offset(row, col)?])
    }

    /// Sets the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidIndex`] if `row` or `col` is outside `1..=3`.
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

    pub fn copy_values_from(&mut self, source: &Matrix3x3) -> &mut Self {
        self.cells = source.cells;
        self
    }

    pub fn copy_values_to(&self, destination: &mut Matrix3x3) -> &Self {
        destination.cells = self.cells;
        self
    }

    // row and col are 0-based here
    #[inline]
    fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row * SIZE + col]
    }

    fn zip_with(&self, other: &Matrix3x3, op: impl Fn(f64, f64) -> f64) -> Self {
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

    pub fn add(&self, other: &Matrix3x3) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn add_in_place(&mut self, other: &Matrix3x3) -> &mut Self {
        *self = Matrix3x3::add(self, other);
        self
    }

    pub fn subtract(&self, other: &Matrix3x3) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn subtract_in_place(&mut self, other: &Matrix3x3) -> &mut Self {
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

    pub fn divide(&self, value: f64) -> Self {
        self.map(|a| a / value)
    }

    pub fn divide_in_place(&mut self, value: f64) -> &mut Self {
        *self = self.divide(value);
        self
    }

    /// Computes `M * v`.
    pub fn multiply_by_vector(&self, vector: &Vector3) -> Vector3 {
        let v = vector.to_array();
        let mut result = [0.0; SIZE];

        for (i, out) in result.iter_mut().enumerate() {
            for (j, component) in v.iter().enumerate() {
                *out += self.cell(i, j) * component;
            }
        }

        Vector3::from_array(result)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// Not commutative: the result applies `other` first, then `self`.
    pub fn multiply_by_matrix(&self, other: &Matrix3x3) -> Self {
        let mut cells = [0.0; SIZE * SIZE];

        for (i, row) in cells.chunks_mut(SIZE).enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..SIZE {
                    *cell += self.cell(i, k) * other.cell(k, j);
                }
            }
        }

        Self { cells }
    }

    pub fn multiply_by_matrix_in_place(&mut self, other: &Matrix3x3) -> &mut Self {
        *self = self.multiply_by_matrix(other);
        self
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = |r, c| self.cell(r, c);

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }
}

impl PartialEq for Matrix3x3 {
    fn eq(&self, other: &Self) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| tolerance::are_equal(*a, *b))
    }
}

impl std::ops::Add for Matrix3x3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix3x3::add(&self, &rhs)
    }
}

impl std::ops::Sub for Matrix3x3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul<f64> for Matrix3x3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply_by_scalar(scalar)
    }
}

impl std::ops::Div<f64> for Matrix3x3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide(scalar)
    }
}

impl std::ops::Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply_by_matrix(&rhs)
    }
}

impl std::ops::Mul<&Matrix3x3> for Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: &Matrix3x3) -> Matrix3x3 {
        self.multiply_by_matrix(rhs)
    }
}

impl std::ops::Mul<Matrix3x3> for &Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        self.multiply_by_matrix(&rhs)
    }
}

impl std::ops::Mul<&Matrix3x3> for &Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: &Matrix3x3) -> Matrix3x3 {
        self.multiply_by_matrix(rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.multiply_by_vector(&vec)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3x3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.multiply_by_vector(&vec)
    }
}

impl std::ops::AddAssign for Matrix3x3 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::SubAssign for Matrix3x3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(&rhs);
    }
}

impl std::ops::MulAssign<f64> for Matrix3x3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.multiply_by_scalar_in_place(scalar);
    }
}

impl std::ops::MulAssign for Matrix3x3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_by_matrix_in_place(&rhs);
    }
}

impl std::ops::DivAssign<f64> for Matrix3x3 {
    fn div_assign(&mut self, scalar: f64) {
        self.divide_in_place(scalar);
    }
}

impl fmt::Display for Matrix3x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3x3:")?;
        for row in self.cells.chunks(SIZE) {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
