//! Weighted Jacobi relaxation over CSR matrices.
//!
//! Every kernel snapshots `x` into `temp` before touching any row and then
//! reads neighbours only from `temp`, so rows of one sweep never see each
//! other's updates. Rows whose diagonal is exactly zero, or missing, keep
//! their old value.

pub mod jacobi;
pub mod jacobi_multi;
pub mod smoother;
pub mod sweep;

pub use jacobi::jacobi;
#[cfg(feature = "rayon")]
pub use jacobi::jacobi_parallel;
pub use jacobi_multi::jacobi_multi;
#[cfg(feature = "rayon")]
pub use jacobi_multi::jacobi_multi_parallel;
pub use smoother::JacobiSmoother;
pub use sweep::{RowSweep, SweepType};

use num_traits::Float;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use crate::matrix::CsrView;

/// Shape checks shared by the single and block kernels. Runs before any write.
pub(crate) fn check_relax_args<I: CsrIndex, T>(
    a: &CsrView<'_, I, T>,
    nrhs: usize,
    x: &[T],
    b: &[T],
    temp: &[T],
    sweep: &RowSweep,
) -> Result<(), CsrError> {
    if !a.is_square() {
        return Err(CsrError::NotSquare { nrows: a.nrows(), ncols: a.ncols() });
    }
    if nrhs == 0 {
        return Err(CsrError::ZeroBlockSize);
    }
    let expected = a
        .nrows()
        .checked_mul(nrhs)
        .ok_or(CsrError::BlockSizeOverflow { nrows: a.nrows(), nrhs })?;
    for (what, len) in [("x", x.len()), ("b", b.len()), ("temp", temp.len())] {
        if len != expected {
            return Err(CsrError::DimensionMismatch { what, expected, found: len });
        }
    }
    sweep.check_bounds(a.nrows())
}

/// `(1 - ω) t + ω (b - rsum) / diag`
#[inline(always)]
pub(crate) fn relaxed<T: Float>(omega: T, t: T, b: T, rsum: T, diag: T) -> T {
    (T::one() - omega) * t + omega * ((b - rsum) / diag)
}
