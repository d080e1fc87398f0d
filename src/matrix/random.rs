//! Seeded uniform matrix generation.
//!
//! Every value drawn in a process comes from one stream: generating A and
//! then B continues the same sequence rather than restarting it.

use crate::error::Result;
use crate::matrix::dense::Matrix;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Seed used for the process-wide stream.
pub const SEED: u64 = 42;

/// Owned generator drawing from U[0, 1).
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    rng: StdRng,
    dist: Uniform<f64>,
    draws: u64,
}

impl MatrixGenerator {
    /// Create a new generator with the given seed for reproducibility.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(0.0, 1.0),
            draws: 0,
        }
    }

    /// Fill a `rows × cols` matrix in row-major order from the stream.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Matrix> {
        let matrix = Matrix::from_fn_row_major(rows, cols, || self.dist.sample(&mut self.rng))?;
        self.draws += (rows * cols) as u64;
        tracing::trace!(rows, cols, draws = self.draws, "generated matrix");
        Ok(matrix)
    }

    /// Total values drawn from this stream so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::new(SEED)
    }
}

static SHARED: OnceLock<Mutex<MatrixGenerator>> = OnceLock::new();

/// Generate from the process-wide stream, seeding it with [`SEED`] on first use.
pub fn generate(rows: usize, cols: usize) -> Result<Matrix> {
    let shared = SHARED.get_or_init(|| Mutex::new(MatrixGenerator::default()));
    // A panic mid-fill leaves the rng in a valid state, so poisoning is harmless.
    let mut generator = shared.lock().unwrap_or_else(PoisonError::into_inner);
    generator.generate(rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_unit_interval() {
        let mut g = MatrixGenerator::new(SEED);
        let m = g.generate(16, 16).unwrap();
        assert!(m.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = MatrixGenerator::new(SEED).generate(3, 3).unwrap();
        let b = MatrixGenerator::new(SEED).generate(3, 3).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_stream_continues_across_calls() {
        let mut split = MatrixGenerator::new(SEED);
        let first = split.generate(2, 3).unwrap();
        let second = split.generate(3, 2).unwrap();

        let whole = MatrixGenerator::new(SEED).generate(4, 3).unwrap();

        let joined: Vec<f64> = first
            .as_slice()
            .iter()
            .chain(second.as_slice())
            .copied()
            .collect();
        assert_eq!(joined, whole.as_slice());
        assert_eq!(split.draws(), 12);
    }

    #[test]
    fn test_second_matrix_differs_from_first() {
        let mut g = MatrixGenerator::new(SEED);
        let a = g.generate(3, 3).unwrap();
        let b = g.generate(3, 3).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_zero_dimension_rejected_without_drawing() {
        let mut g = MatrixGenerator::new(SEED);
        assert!(g.generate(0, 3).is_err());
        assert_eq!(g.draws(), 0);
    }

    #[test]
    fn test_shared_generator_produces_requested_shape() {
        let m = generate(2, 5).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 5));
    }
}
