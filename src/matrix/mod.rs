//! Matrix storage, seeded generation, and the naive baseline.
//!
//! The naive implementation is the correctness reference the parallel
//! kernel is checked against.

pub mod dense;
pub mod naive_ijk;
pub mod random;

pub use dense::Matrix;
