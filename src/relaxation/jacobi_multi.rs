// Weighted Jacobi for several right-hand sides sharing one matrix

use log::trace;
use num_traits::Float;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use crate::matrix::CsrView;
use crate::relaxation::{check_relax_args, relaxed, RowSweep};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Relax row `i` of every right-hand side, writing into `x_row` (the `nrhs`
/// components of row `i`). `rsum` is zeroed here.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn relax_row<I: CsrIndex, T: Float>(
    a: &CsrView<'_, I, T>,
    i: usize,
    nrhs: usize,
    x_row: &mut [T],
    b: &[T],
    temp: &[T],
    rsum: &mut [T],
    omega: T,
) {
    rsum.fill(T::zero());
    let mut diag = T::zero();
    for (j, v) in a.row(i) {
        if j == i {
            diag = v;
        } else {
            let t_row = &temp[j * nrhs..(j + 1) * nrhs];
            for (r, &t) in rsum.iter_mut().zip(t_row) {
                *r = *r + v * t;
            }
        }
    }
    if diag == T::zero() {
        return;
    }
    let base = i * nrhs;
    let t_row = &temp[base..base + nrhs];
    let b_row = &b[base..base + nrhs];
    for (k, xk) in x_row.iter_mut().enumerate() {
        *xk = relaxed(omega, t_row[k], b_row[k], rsum[k], diag);
    }
}

/// One weighted Jacobi sweep applied to `nrhs` systems `A X = B` at once.
///
/// `x`, `b` and `temp` are row-major `n × nrhs`: component `k` of row `i`
/// sits at `i * nrhs + k`. Each visited row uses the same diagonal rule as
/// [`jacobi`](crate::relaxation::jacobi) for all its components, and with
/// `nrhs == 1` the two kernels produce bit-identical results.
pub fn jacobi_multi<I, T>(
    a: &CsrView<'_, I, T>,
    x: &mut [T],
    b: &[T],
    temp: &mut [T],
    nrhs: usize,
    sweep: RowSweep,
    omega: T,
) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float,
{
    check_relax_args(a, nrhs, x, b, temp, &sweep)?;
    trace!("jacobi_multi: n={} nrhs={} nnz={} sweep={:?}", a.nrows(), nrhs, a.nnz(), sweep);

    temp.copy_from_slice(x);

    let mut rsum = vec![T::zero(); nrhs];
    for i in sweep.rows() {
        let x_row = &mut x[i * nrhs..(i + 1) * nrhs];
        relax_row(a, i, nrhs, x_row, b, temp, &mut rsum, omega);
    }
    Ok(())
}

/// [`jacobi_multi`] with rows updated concurrently on the Rayon pool. Each
/// worker keeps its own `rsum` scratch.
#[cfg(feature = "rayon")]
pub fn jacobi_multi_parallel<I, T>(
    a: &CsrView<'_, I, T>,
    x: &mut [T],
    b: &[T],
    temp: &mut [T],
    nrhs: usize,
    sweep: RowSweep,
    omega: T,
) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float + Send + Sync,
{
    check_relax_args(a, nrhs, x, b, temp, &sweep)?;
    trace!(
        "jacobi_multi_parallel: n={} nrhs={} nnz={} sweep={:?}",
        a.nrows(),
        nrhs,
        a.nnz(),
        sweep
    );

    temp.copy_from_slice(x);
    let temp = &*temp;

    let span = sweep.span();
    let offset = span.start;
    let min_len = crate::parallel::min_rows_per_task(span.len());
    x[span.start * nrhs..span.end * nrhs]
        .par_chunks_mut(nrhs)
        .enumerate()
        .with_min_len(min_len)
        .map(|(k, x_row)| (k + offset, x_row))
        .filter(|(i, _)| sweep.contains(*i))
        .for_each_init(
            || vec![T::zero(); nrhs],
            |rsum, (i, x_row)| relax_row(a, i, nrhs, x_row, b, temp, rsum, omega),
        );
    Ok(())
}
