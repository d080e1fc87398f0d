//! Multi-threaded matmul.
//!
//! Every call builds its own worker pool, sized by the call's
//! [`KernelConfig`](nested::KernelConfig). Rows are parallel across the
//! pool and, optionally, so is each cell's k-reduction.
//!
//! Available implementations:
//! - `nested`: row-parallel outer loop, tunable nested k-reduction

pub mod nested;

pub use nested::{KernelConfig, Product, Reduction, multiply};
