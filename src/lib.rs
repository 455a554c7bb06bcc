//! csr-relax: Compressed Sparse Row kernels for iterative solvers
//!
//! This crate provides the numeric building blocks a multigrid or Krylov solver
//! driver calls in its inner loop: an accumulating sparse matrix-vector product
//! and weighted Jacobi relaxation for one or several right-hand sides. Kernels
//! work on caller-owned slices through a validated [`CsrView`], never allocate
//! output, and report contract violations as [`CsrError`] before writing anything.

#[cfg(feature = "rayon")]
pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod relaxation;
pub mod utils;

// Re-exports for convenience
pub use crate::config::RelaxOptions;
pub use crate::core::CsrIndex;
pub use crate::error::CsrError;
pub use crate::matrix::{csr_matvec, residual, CsrMatrix, CsrView, SparseMatrix};
#[cfg(feature = "rayon")]
pub use crate::matrix::csr_matvec_parallel;
pub use crate::relaxation::{jacobi, jacobi_multi, JacobiSmoother, RowSweep, SweepType};
#[cfg(feature = "rayon")]
pub use crate::relaxation::{jacobi_multi_parallel, jacobi_parallel};
pub use crate::utils::BlockDisplay;
