// Weighted Jacobi, one right-hand side

use log::trace;
use num_traits::Float;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use crate::matrix::CsrView;
use crate::relaxation::{check_relax_args, relaxed, RowSweep};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Diagonal and off-diagonal sum `Σ_{j≠i} a_ij t_j` of row `i`.
///
/// When the diagonal is stored more than once the last entry in storage
/// order is taken. A row without a diagonal reports zero.
#[inline(always)]
fn split_row<I: CsrIndex, T: Float>(a: &CsrView<'_, I, T>, i: usize, temp: &[T]) -> (T, T) {
    let mut rsum = T::zero();
    let mut diag = T::zero();
    for (j, v) in a.row(i) {
        if j == i {
            diag = v;
        } else {
            rsum = rsum + v * temp[j];
        }
    }
    (diag, rsum)
}

/// One weighted Jacobi sweep on `A x = b` over the rows of `sweep`.
///
/// `x`, `b` and `temp` have length `n` for a square `n×n` matrix. `temp` is
/// scratch and is overwritten with the pre-sweep `x`. For each visited row
/// with a non-zero diagonal,
///
/// `x[i] = (1 - ω) x_old[i] + ω (b[i] - Σ_{j≠i} a_ij x_old[j]) / a_ii`
///
/// Rows with a zero or absent diagonal are left as they were. `ω = 1` is
/// plain Jacobi, `ω = 0` leaves `x` unchanged.
///
/// All shape and range checks run before `x` or `temp` are written.
pub fn jacobi<I, T>(
    a: &CsrView<'_, I, T>,
    x: &mut [T],
    b: &[T],
    temp: &mut [T],
    sweep: RowSweep,
    omega: T,
) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float,
{
    check_relax_args(a, 1, x, b, temp, &sweep)?;
    trace!("jacobi: n={} nnz={} sweep={:?}", a.nrows(), a.nnz(), sweep);

    temp.copy_from_slice(x);

    for i in sweep.rows() {
        let (diag, rsum) = split_row(a, i, temp);
        if diag != T::zero() {
            x[i] = relaxed(omega, temp[i], b[i], rsum, diag);
        }
    }
    Ok(())
}

/// [`jacobi`] with the update phase spread over the Rayon pool.
///
/// The snapshot is complete before any row is updated, and each row only
/// writes its own `x[i]`, so the result matches the serial kernel exactly.
#[cfg(feature = "rayon")]
pub fn jacobi_parallel<I, T>(
    a: &CsrView<'_, I, T>,
    x: &mut [T],
    b: &[T],
    temp: &mut [T],
    sweep: RowSweep,
    omega: T,
) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float + Send + Sync,
{
    check_relax_args(a, 1, x, b, temp, &sweep)?;
    trace!("jacobi_parallel: n={} nnz={} sweep={:?}", a.nrows(), a.nnz(), sweep);

    temp.copy_from_slice(x);
    let temp = &*temp;

    let span = sweep.span();
    let offset = span.start;
    let min_len = crate::parallel::min_rows_per_task(span.len());
    x[span]
        .par_iter_mut()
        .enumerate()
        .with_min_len(min_len)
        .map(|(k, xi)| (k + offset, xi))
        .filter(|(i, _)| sweep.contains(*i))
        .for_each(|(i, xi)| {
            let (diag, rsum) = split_row(a, i, temp);
            if diag != T::zero() {
                *xi = relaxed(omega, temp[i], b[i], rsum, diag);
            }
        });
    Ok(())
}
