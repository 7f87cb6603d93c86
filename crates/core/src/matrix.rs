use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of equations in a system.
pub const EQUATIONS: usize = 3;

/// Number of unknowns (`x`, `y`, `z`) in a system.
pub const UNKNOWNS: usize = 3;

/// Number of flat coefficients describing a system: `[a, b, c, d]` per equation.
pub const COEFFICIENT_COUNT: usize = EQUATIONS * (UNKNOWNS + 1);

/// Error returned when a flat coefficient list does not describe a full system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} coefficients, found {found}")]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
}

/// A square three-by-three matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3([[f64; 3]; 3]);

impl Matrix3 {
    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    /// Returns the rows of the matrix.
    #[must_use]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Returns the determinant using cofactor expansion along the first row.
    ///
    /// Singular matrices yield zero. The expansion is evaluated exactly as
    /// written, so its rounding behavior is part of the contract.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;

        m00 * (m11 * m22 - m21 * m12) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }
}

/// A system of three linear equations in three unknowns.
///
/// Row `i` holds `[a, b, c, d]` for the equation `a·x + b·y + c·z = d`.
/// The matrix is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationMatrix([[f64; 4]; 3]);

impl EquationMatrix {
    /// Creates a system from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 4]; 3]) -> Self {
        Self(rows)
    }

    /// Builds a system by filling rows from a flat coefficient list.
    ///
    /// # Errors
    ///
    /// Returns a `ShapeError` unless exactly [`COEFFICIENT_COUNT`] values
    /// are given.
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self, ShapeError> {
        if coefficients.len() != COEFFICIENT_COUNT {
            return Err(ShapeError {
                expected: COEFFICIENT_COUNT,
                found: coefficients.len(),
            });
        }

        let mut rows = [[0.0; 4]; 3];
        for (row, chunk) in rows.iter_mut().zip(coefficients.chunks_exact(UNKNOWNS + 1)) {
            row.copy_from_slice(chunk);
        }

        Ok(Self(rows))
    }

    /// Returns the equations as `[a, b, c, d]` rows.
    #[must_use]
    pub const fn rows(&self) -> &[[f64; 4]; 3] {
        &self.0
    }

    /// Returns the matrix of unknown coefficients (columns `a`, `b`, `c`).
    #[must_use]
    pub fn coefficients(&self) -> Matrix3 {
        Matrix3(self.0.map(|[a, b, c, _]| [a, b, c]))
    }

    /// Returns the right-hand-side constants.
    #[must_use]
    pub fn constants(&self) -> [f64; 3] {
        self.0.map(|row| row[UNKNOWNS])
    }

    /// Returns the coefficient matrix with `column` replaced by the constants.
    ///
    /// Returns `None` if `column` is not `0`, `1`, or `2`.
    #[must_use]
    pub fn substitute(&self, column: usize) -> Option<Matrix3> {
        (column < UNKNOWNS).then(|| self.replace_column(column))
    }

    /// Returns the three substituted matrices, one per unknown column.
    #[must_use]
    pub fn substitutions(&self) -> [Matrix3; UNKNOWNS] {
        std::array::from_fn(|column| self.replace_column(column))
    }

    fn replace_column(&self, column: usize) -> Matrix3 {
        let mut substituted = self.coefficients();
        for (row, constant) in substituted.0.iter_mut().zip(self.constants()) {
            row[column] = constant;
        }
        substituted
    }
}
