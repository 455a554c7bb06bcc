//! Core traits for csr-relax.

/// Integer type usable for CSR `row_ptr` / `col_idx` storage.
///
/// Signed types are accepted so that arrays produced by other toolkits
/// (e.g. 32-bit signed index arrays) can be viewed without copying. A
/// negative entry is reported as a contract violation during validation.
pub trait CsrIndex: Copy + Send + Sync + 'static {
    /// Widen to `usize`, or `None` when the value is negative or does not fit.
    fn try_index(self) -> Option<usize>;

    /// Plain cast to `usize`.
    ///
    /// Only meaningful for values already accepted by [`try_index`](Self::try_index);
    /// kernels call it on data validated by [`CsrView::new`](crate::matrix::CsrView::new).
    fn as_usize(self) -> usize;
}

macro_rules! impl_csr_index {
    ($($t:ty),*) => {
        $(
            impl CsrIndex for $t {
                #[inline(always)]
                fn try_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_csr_index!(i32, i64, isize, u32, u64, usize);
