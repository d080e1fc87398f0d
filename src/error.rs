use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("invalid matrix dimensions {rows}x{cols}: both must be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("matmul dimension mismatch: [{a_rows}x{a_cols}] @ [{b_rows}x{b_cols}]")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    #[error("sweep expects [{n}x{m}] @ [{m}x{p}], got [{a_rows}x{a_cols}] @ [{b_rows}x{b_cols}]")]
    SweepShapeMismatch {
        n: usize,
        m: usize,
        p: usize,
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    #[error("thread count must be at least 1")]
    InvalidThreadCount,
    #[error("reduction split factor must be at least 1")]
    InvalidReductionSplit,
    #[error("failed to allocate {elements} f64 elements")]
    AllocationFailed { elements: usize },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
