//! Row-major dense matrix backed by a single contiguous buffer.

use crate::error::{MatmulError, Result};
use std::ops::Index;

/// Dense `f64` matrix, row-major.
///
/// Element (i, j) lives at offset `i * cols + j`. Dimensions are fixed at
/// construction; the buffer is released when the matrix is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-filled `rows × cols` matrix.
    ///
    /// Returns [`MatmulError::AllocationFailed`] instead of aborting when the
    /// buffer can't be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut data = try_alloc(len)?;
        data.resize(len, 0.0);
        Ok(Self { data, rows, cols })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatmulError::InvalidDimensions { rows, cols });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix by pulling `rows * cols` values from `fill` in
    /// row-major order.
    pub(crate) fn from_fn_row_major<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self>
    where
        F: FnMut() -> f64,
    {
        let len = checked_len(rows, cols)?;
        let mut data = try_alloc(len)?;
        data.extend((0..len).map(|_| fill()));
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (i, j), or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Largest absolute element-wise difference, or `None` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatmulError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatmulError::InvalidDimensions { rows, cols })
}

fn try_alloc(len: usize) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatmulError::AllocationFailed { elements: len })?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_is_zero_filled() {
        let m = Matrix::zeros(3, 4).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Matrix::zeros(0, 4),
            Err(MatmulError::InvalidDimensions { rows: 0, cols: 4 })
        ));
        assert!(Matrix::zeros(4, 0).is_err());
    }

    #[test]
    fn test_row_major_indexing() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(1, 2), Some(6.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(Matrix::from_vec(2, 2, vec![1.0; 3]).is_err());
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let b = Matrix::from_vec(1, 3, vec![1.5, 2.0, 2.0]).unwrap();
        assert_eq!(a.max_abs_diff(&b), Some(1.0));

        let c = Matrix::zeros(3, 1).unwrap();
        assert_eq!(a.max_abs_diff(&c), None);
    }

    #[test]
    fn test_overflowing_dimensions_report_shape() {
        assert!(matches!(
            Matrix::zeros(usize::MAX, 2),
            Err(MatmulError::InvalidDimensions { rows: usize::MAX, cols: 2 })
        ));
    }

    #[test]
    fn test_unallocatable_size_reports_element_count() {
        let rows = usize::MAX / 8;
        assert!(matches!(
            Matrix::zeros(rows, 1),
            Err(MatmulError::AllocationFailed { elements }) if elements == rows
        ));
    }
}
