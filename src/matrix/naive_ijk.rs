use crate::error::{MatmulError, Result};
use crate::matrix::dense::Matrix;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation, one fixed-order dot
/// product per output cell. The innermost loop walks B with stride `cols`,
/// so it's slow on large inputs.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (n × m)
/// * `b` - Matrix B (m × p)
///
/// Returns C (n × p), or [`MatmulError::DimensionMismatch`] when
/// `a.cols() != b.rows()`.
pub fn matmul_naive_ijk(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_inner_dims(a, b)?;

    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    let p = b.cols();
    let out = c.as_mut_slice();
    for i in 0..a.rows() {
        for j in 0..p {
            out[i * p + j] = reference_dot(a, b, i, j, 0..a.cols());
        }
    }
    Ok(c)
}

/// Sequential dot product of row `i` of A and column `j` of B over `ks`,
/// accumulated in ascending k order.
///
/// # Panics
///
/// Panics if `i >= a.rows()`, `j >= b.cols()`, or `ks` reaches past
/// `a.cols()` or `b.rows()`.
pub fn reference_dot(a: &Matrix, b: &Matrix, i: usize, j: usize, ks: std::ops::Range<usize>) -> f64 {
    let a_row = a.row(i);
    let b_data = b.as_slice();
    let p = b.cols();

    let mut sum = 0.0;
    for k in ks {
        sum += a_row[k] * b_data[k * p + j];
    }
    sum
}

pub(crate) fn check_inner_dims(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatmulError::DimensionMismatch {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }
    Ok(())
}
