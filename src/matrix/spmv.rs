//! Sparse matrix-vector product `y += A x`.

use log::trace;
use num_traits::Float;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use crate::matrix::csr::CsrView;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

fn check_matvec_lengths<I, T>(a: &CsrView<'_, I, T>, x: &[T], y: &[T]) -> Result<(), CsrError>
where
    I: CsrIndex,
{
    if x.len() < a.ncols() {
        return Err(CsrError::DimensionMismatch { what: "x", expected: a.ncols(), found: x.len() });
    }
    if y.len() < a.nrows() {
        return Err(CsrError::DimensionMismatch { what: "y", expected: a.nrows(), found: y.len() });
    }
    Ok(())
}

/// Sum of `y[i]` and row `i` of `A x`, in storage order.
#[inline(always)]
fn row_dot<I: CsrIndex, T: Float>(a: &CsrView<'_, I, T>, i: usize, x: &[T], yi: T) -> T {
    a.row(i).fold(yi, |sum, (j, v)| sum + v * x[j])
}

/// Accumulating product: `y[i] += Σ_jj values[jj] * x[col_idx[jj]]` for every row.
///
/// `y` is added to, not overwritten; zero it first for a plain product.
/// Terms are summed in storage order and duplicate columns each contribute,
/// so the result is reproducible for a fixed layout.
///
/// `x.len() >= ncols` and `y.len() >= nrows` are required; only `y[..nrows]`
/// is written. On `Err` nothing has been written.
pub fn csr_matvec<I, T>(a: &CsrView<'_, I, T>, x: &[T], y: &mut [T]) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float,
{
    check_matvec_lengths(a, x, y)?;
    trace!("csr_matvec: {}x{} nnz={}", a.nrows(), a.ncols(), a.nnz());
    for (i, yi) in y[..a.nrows()].iter_mut().enumerate() {
        *yi = row_dot(a, i, x, *yi);
    }
    Ok(())
}

/// Row-parallel [`csr_matvec`]. Each task owns its `y[i]`, so the result is
/// bit-identical to the serial kernel.
#[cfg(feature = "rayon")]
pub fn csr_matvec_parallel<I, T>(a: &CsrView<'_, I, T>, x: &[T], y: &mut [T]) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float + Send + Sync,
{
    check_matvec_lengths(a, x, y)?;
    trace!("csr_matvec_parallel: {}x{} nnz={}", a.nrows(), a.ncols(), a.nnz());
    let min_len = crate::parallel::min_rows_per_task(a.nrows());
    y[..a.nrows()]
        .par_iter_mut()
        .enumerate()
        .with_min_len(min_len)
        .for_each(|(i, yi)| *yi = row_dot(a, i, x, *yi));
    Ok(())
}

/// Residual `r = b - A x`.
pub fn residual<I, T>(a: &CsrView<'_, I, T>, x: &[T], b: &[T], r: &mut [T]) -> Result<(), CsrError>
where
    I: CsrIndex,
    T: Float,
{
    if b.len() != a.nrows() {
        return Err(CsrError::DimensionMismatch { what: "b", expected: a.nrows(), found: b.len() });
    }
    if r.len() != a.nrows() {
        return Err(CsrError::DimensionMismatch { what: "r", expected: a.nrows(), found: r.len() });
    }
    if x.len() < a.ncols() {
        return Err(CsrError::DimensionMismatch { what: "x", expected: a.ncols(), found: x.len() });
    }
    for (i, (ri, &bi)) in r.iter_mut().zip(b).enumerate() {
        *ri = bi - row_dot(a, i, x, T::zero());
    }
    Ok(())
}
