//! Row-parallel matmul with an optionally parallel k-reduction.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::{check_inner_dims, reference_dot};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// How the dot product for a single output cell is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// One fixed-order loop over k inside the worker that owns the row.
    Sequential,
    /// Split k into `splits` contiguous chunks, reduce them in parallel on
    /// the same pool, then sum the partials.
    Nested { splits: usize },
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Sequential => write!(f, "sequential"),
            Reduction::Nested { splits } => write!(f, "nested x{}", splits),
        }
    }
}

/// Per-call kernel configuration.
///
/// The thread count lives here rather than in any global setting, so two
/// concurrent calls never see each other's pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    pub threads: usize,
    pub reduction: Reduction,
}

impl KernelConfig {
    /// `threads` workers, with the k-reduction nested `threads` ways.
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            reduction: Reduction::Nested { splits: threads },
        }
    }

    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(MatmulError::InvalidThreadCount);
        }
        if let Reduction::Nested { splits: 0 } = self.reduction {
            return Err(MatmulError::InvalidReductionSplit);
        }
        Ok(())
    }
}

/// Result matrix plus the wall-clock time of the parallel phase.
#[derive(Debug)]
pub struct Product {
    pub matrix: Matrix,
    pub elapsed: Duration,
}

impl Product {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Multiply `a` (n × m) by `b` (m × p) on a pool of `config.threads` workers.
///
/// Rows of C are handed out to idle workers by rayon's work stealing; within
/// a row, columns run in order. Each cell's k-loop is reduced according to
/// `config.reduction`. Results are numerically close across configurations
/// but not bit-identical, since the partial-sum order changes with the split.
///
/// C is allocated and zeroed and the pool is built before the timer starts;
/// `elapsed` covers only the parallel region. The call blocks until every
/// row is done.
pub fn multiply(a: &Matrix, b: &Matrix, config: KernelConfig) -> Result<Product> {
    check_inner_dims(a, b)?;
    config.validate()?;

    let span = tracing::debug_span!(
        "multiply",
        threads = config.threads,
        reduction = %config.reduction
    );
    let _guard = span.enter();

    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("matmul-worker-{}", i))
        .build()?;

    let p = b.cols();
    let start = Instant::now();
    pool.install(|| {
        c.as_mut_slice()
            .par_chunks_mut(p)
            .enumerate()
            .for_each(|(i, c_row)| {
                for (j, cell) in c_row.iter_mut().enumerate() {
                    *cell = cell_dot(a, b, i, j, config.reduction);
                }
            });
    });
    let elapsed = start.elapsed();

    tracing::debug!(elapsed_secs = elapsed.as_secs_f64(), "multiply finished");
    Ok(Product { matrix: c, elapsed })
}

fn cell_dot(a: &Matrix, b: &Matrix, i: usize, j: usize, reduction: Reduction) -> f64 {
    let m = a.cols();
    match reduction {
        Reduction::Sequential => reference_dot(a, b, i, j, 0..m),
        Reduction::Nested { splits } => {
            let chunk = m.div_ceil(splits);
            let chunks = m.div_ceil(chunk);
            if chunks == 1 {
                return reference_dot(a, b, i, j, 0..m);
            }
            (0..chunks)
                .into_par_iter()
                .map(|s| {
                    let lo = s * chunk;
                    let hi = (lo + chunk).min(m);
                    reference_dot(a, b, i, j, lo..hi)
                })
                .sum()
        }
    }
}
