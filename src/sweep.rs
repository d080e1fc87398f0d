//! Thread-count sweep over a fixed pair of input matrices.

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::threaded::{KernelConfig, Reduction, multiply};
use std::fmt;
use std::time::Duration;

/// Rows of A and C.
pub const N: usize = 1000;
/// Columns of A, rows of B (the reduction dimension).
pub const M: usize = 1000;
/// Columns of B and C.
pub const P: usize = 1000;
/// Thread counts, in the order they run.
pub const THREAD_SWEEP: [usize; 5] = [1, 2, 4, 8, 16];

/// Benchmark parameters. `Default` is the fixed benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub n: usize,
    pub m: usize,
    pub p: usize,
    pub thread_counts: Vec<usize>,
    /// `None` nests the k-reduction as wide as the outer pool.
    pub reduction: Option<Reduction>,
}

impl BenchConfig {
    pub fn kernel_config(&self, threads: usize) -> KernelConfig {
        let config = KernelConfig::new(threads);
        match self.reduction {
            Some(reduction) => config.with_reduction(reduction),
            None => config,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: N,
            m: M,
            p: P,
            thread_counts: THREAD_SWEEP.to_vec(),
            reduction: None,
        }
    }
}

/// One completed sweep configuration.
#[derive(Debug)]
pub struct SweepPoint {
    pub threads: usize,
    pub elapsed: Duration,
    pub result: Matrix,
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time with {} threads: {:.6} seconds.",
            self.threads,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Multiply `a` by `b` once per entry of `config.thread_counts`.
///
/// `a` must be `n × m` and `b` must be `m × p` as given by `config`;
/// anything else is rejected before any multiply runs.
///
/// `on_point` sees each point as soon as it finishes. A failing point
/// returns the error before `on_point` runs for it.
pub fn run_sweep<F>(a: &Matrix, b: &Matrix, config: &BenchConfig, mut on_point: F) -> Result<Vec<SweepPoint>>
where
    F: FnMut(&SweepPoint),
{
    if (a.rows(), a.cols(), b.rows(), b.cols()) != (config.n, config.m, config.m, config.p) {
        return Err(MatmulError::SweepShapeMismatch {
            n: config.n,
            m: config.m,
            p: config.p,
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }

    let mut points = Vec::with_capacity(config.thread_counts.len());
    for &threads in &config.thread_counts {
        let product = multiply(a, b, config.kernel_config(threads))?;
        let point = SweepPoint {
            threads,
            elapsed: product.elapsed,
            result: product.matrix,
        };
        tracing::info!(threads, elapsed_secs = point.elapsed.as_secs_f64(), "sweep point");
        on_point(&point);
        points.push(point);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::random::{MatrixGenerator, SEED};

    #[test]
    fn test_default_is_fixed_benchmark() {
        let config = BenchConfig::default();
        assert_eq!((config.n, config.m, config.p), (1000, 1000, 1000));
        assert_eq!(config.thread_counts, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_kernel_config_override() {
        let config = BenchConfig {
            reduction: Some(Reduction::Sequential),
            ..BenchConfig::default()
        };
        assert_eq!(config.kernel_config(4).reduction, Reduction::Sequential);
        assert_eq!(
            BenchConfig::default().kernel_config(4).reduction,
            Reduction::Nested { splits: 4 }
        );
    }

    #[test]
    fn test_sweep_reports_each_point_in_order() {
        let mut g = MatrixGenerator::new(SEED);
        let a = g.generate(8, 6).unwrap();
        let b = g.generate(6, 5).unwrap();
        let config = BenchConfig {
            n: 8,
            m: 6,
            p: 5,
            thread_counts: vec![1, 2, 4],
            ..BenchConfig::default()
        };

        let mut seen = Vec::new();
        let points = run_sweep(&a, &b, &config, |p| seen.push(p.threads)).unwrap();

        assert_eq!(seen, vec![1, 2, 4]);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.result.rows() == 8 && p.result.cols() == 5));
    }

    #[test]
    fn test_failing_point_is_not_reported() {
        let a = Matrix::zeros(2, 2).unwrap();
        let config = BenchConfig {
            n: 2,
            m: 2,
            p: 2,
            thread_counts: vec![1, 0, 2],
            ..BenchConfig::default()
        };

        let mut seen = Vec::new();
        let err = run_sweep(&a, &a, &config, |p| seen.push(p.threads)).unwrap_err();

        assert!(matches!(err, MatmulError::InvalidThreadCount));
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_inputs_must_match_configured_sizes() {
        let mut g = MatrixGenerator::new(SEED);
        let a = g.generate(4, 3).unwrap();
        let b = g.generate(3, 2).unwrap();

        let cases = [(4, 3, 2, true), (5, 3, 2, false), (4, 6, 2, false), (4, 3, 7, false)];
        for (n, m, p, ok) in cases {
            let config = BenchConfig {
                n,
                m,
                p,
                thread_counts: vec![1],
                ..BenchConfig::default()
            };
            let mut seen = 0;
            let result = run_sweep(&a, &b, &config, |_| seen += 1);
            if ok {
                assert_eq!(result.unwrap().len(), 1);
                assert_eq!(seen, 1);
            } else {
                assert!(matches!(
                    result,
                    Err(MatmulError::SweepShapeMismatch { a_rows: 4, a_cols: 3, b_rows: 3, b_cols: 2, .. })
                ));
                assert_eq!(seen, 0, "no point may run for {}x{}x{}", n, m, p);
            }
        }
    }

    #[test]
    fn test_default_sizes_reject_small_inputs() {
        let a = Matrix::zeros(2, 2).unwrap();
        let err = run_sweep(&a, &a, &BenchConfig::default(), |_| {}).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sweep expects [1000x1000] @ [1000x1000], got [2x2] @ [2x2]"
        );
    }

    #[test]
    fn test_timing_line_format() {
        let point = SweepPoint {
            threads: 8,
            elapsed: Duration::from_millis(1500),
            result: Matrix::zeros(1, 1).unwrap(),
        };
        assert_eq!(point.to_string(), "Time with 8 threads: 1.500000 seconds.");
    }
}
