//! Thread-scaling benchmark for a nested-parallel dense matrix multiply.
//!
//! Two seeded random matrices are multiplied on worker pools of 1, 2, 4, 8
//! and 16 threads, and each run's wall-clock time is reported. The rows of
//! C are spread over the pool with work stealing, and each cell's dot
//! product can itself be split across the same pool.
//!
//! ## Usage
//!
//! ```
//! use matmul_sweep::matrix::random::MatrixGenerator;
//! use matmul_sweep::{KernelConfig, multiply};
//!
//! let mut generator = MatrixGenerator::new(42);
//! let a = generator.generate(64, 48).unwrap();
//! let b = generator.generate(48, 32).unwrap();
//!
//! let product = multiply(&a, &b, KernelConfig::new(4)).unwrap();
//! assert_eq!(product.matrix.rows(), 64);
//! assert_eq!(product.matrix.cols(), 32);
//! ```
//!
//! The nested k-reduction is optional:
//!
//! ```
//! use matmul_sweep::matrix::random::MatrixGenerator;
//! use matmul_sweep::{KernelConfig, Reduction, multiply};
//!
//! let mut generator = MatrixGenerator::new(42);
//! let a = generator.generate(16, 16).unwrap();
//! let b = generator.generate(16, 16).unwrap();
//!
//! let config = KernelConfig::new(4).with_reduction(Reduction::Sequential);
//! let product = multiply(&a, &b, config).unwrap();
//! println!("{:.6} s", product.elapsed_secs());
//! ```
//!
//! ## What's inside
//!
//! - Contiguous row-major `Matrix` with fallible allocation
//! - One seeded U[0, 1) stream shared across every generated matrix
//! - Per-call rayon pools, so nothing global holds the thread count
//! - Naive i-j-k baseline for correctness checks

pub mod error;
pub mod matrix;
pub mod sweep;
pub mod threaded;

pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::{matmul_naive_ijk, reference_dot};
pub use sweep::{BenchConfig, SweepPoint, run_sweep};
pub use threaded::{KernelConfig, Product, Reduction, multiply};
