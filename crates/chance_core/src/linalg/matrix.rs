//! Dense row-major matrix.

use crate::numeric::Real;
use crate::types::ChanceError;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix over a numeric representation.
///
/// Borrowing (`&Matrix<T>`) is used for arithmetic composition; taking
/// ownership of the storage is explicit through [`Matrix::into_vec`].
///
/// # Examples
///
/// ```
/// use chance_core::linalg::Matrix;
///
/// let a = Matrix::from_rows(&[&[1.0_f64, 2.0], &[3.0, 4.0]]).unwrap();
/// let i = Matrix::<f64>::identity(2);
/// let product = a.mul(&i).unwrap();
/// assert_eq!(product[(1, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Real> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Real> Matrix<T> {
    /// Zero-filled matrix of shape `(rows, cols)`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = T::one();
        }
        matrix
    }

    /// Builds a matrix from row slices.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if the rows have different lengths.
    pub fn from_rows(rows: &[&[T]]) -> Result<Self, ChanceError> {
        let cols = rows.first().map_or(0, |row| row.len());
        if let Some(index) = rows.iter().position(|row| row.len() != cols) {
            return Err(ChanceError::argument(
                "rows",
                format!("row {} has {} columns, expected {}", index, rows[index].len(), cols),
            ));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        })
    }

    /// Wraps row-major storage.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ChanceError> {
        if data.len() != rows * cols {
            return Err(ChanceError::argument(
                "data",
                format!("has {} elements, expected {}x{}", data.len(), rows, cols),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` for a square matrix.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Takes ownership of the row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sets every element to zero.
    pub fn fill_zero(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::zero());
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Returns `true` when the matrix equals its transpose exactly.
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if the inner dimensions differ.
    pub fn mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ChanceError> {
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        mul_into(self, rhs, &mut out)?;
        Ok(out)
    }

    /// Matrix-vector product written into `out`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` on a shape mismatch.
    pub fn mul_vec_into(&self, x: &[T], out: &mut [T]) -> Result<(), ChanceError> {
        if x.len() != self.cols || out.len() != self.rows {
            return Err(ChanceError::argument(
                "x",
                format!(
                    "shape mismatch: {}x{} matrix, vector of {}, output of {}",
                    self.rows,
                    self.cols,
                    x.len(),
                    out.len()
                ),
            ));
        }
        for (i, slot) in out.iter_mut().enumerate() {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            *slot = row
                .iter()
                .zip(x)
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Ok(())
    }
}

/// Matrix product `a * b` written into `out` without allocating.
///
/// # Errors
///
/// Returns `ArgumentOutOfRange` if the shapes are incompatible.
pub fn mul_into<T: Real>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    out: &mut Matrix<T>,
) -> Result<(), ChanceError> {
    if a.cols != b.rows || out.rows != a.rows || out.cols != b.cols {
        return Err(ChanceError::argument(
            "rhs",
            format!(
                "cannot multiply {}x{} by {}x{} into {}x{}",
                a.rows, a.cols, b.rows, b.cols, out.rows, out.cols
            ),
        ));
    }
    for i in 0..a.rows {
        for j in 0..b.cols {
            let mut sum = T::zero();
            for k in 0..a.cols {
                sum = sum + a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = sum;
        }
    }
    Ok(())
}

impl<T: Real> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T: Real> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
