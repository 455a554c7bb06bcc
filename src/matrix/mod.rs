//! Matrix module: CSR storage and the sparse matrix-vector product.

pub mod csr;
pub use csr::{CsrMatrix, CsrView};
pub mod spmv;
pub use spmv::{csr_matvec, residual};
#[cfg(feature = "rayon")]
pub use spmv::csr_matvec_parallel;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use num_traits::Float;

/// A read-only sparse matrix supporting `y += A x`.
pub trait SparseMatrix<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Accumulate `y += A x`. `x.len() >= ncols()`, `y.len() >= nrows()`.
    fn spmv(&self, x: &[T], y: &mut [T]) -> Result<(), CsrError>;
}

impl<I: CsrIndex, T: Float> SparseMatrix<T> for CsrView<'_, I, T> {
    fn nrows(&self) -> usize {
        CsrView::nrows(self)
    }
    fn ncols(&self) -> usize {
        CsrView::ncols(self)
    }
    fn spmv(&self, x: &[T], y: &mut [T]) -> Result<(), CsrError> {
        csr_matvec(self, x, y)
    }
}

impl<I: CsrIndex, T: Float> SparseMatrix<T> for CsrMatrix<I, T> {
    fn nrows(&self) -> usize {
        CsrMatrix::nrows(self)
    }
    fn ncols(&self) -> usize {
        CsrMatrix::ncols(self)
    }
    fn spmv(&self, x: &[T], y: &mut [T]) -> Result<(), CsrError> {
        csr_matvec(&self.as_view(), x, y)
    }
}
