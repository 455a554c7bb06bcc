//! Compressed Sparse Row storage: the borrowed [`CsrView`] every kernel reads
//! from, and the owned [`CsrMatrix`] convenience container.
//!
//! Layout contract:
//! - `row_ptr` has `nrows + 1` non-decreasing entries, `row_ptr[0] == 0`,
//!   `row_ptr[nrows] == nnz`.
//! - `col_idx[row_ptr[i]..row_ptr[i+1]]` are the columns of row `i`, each in
//!   `[0, ncols)`. They need not be sorted and may repeat; repeated entries
//!   are never merged.
//! - `values` runs parallel to `col_idx`.

use std::ops::Range;

use faer::sparse::{SparseRowMat, SymbolicSparseRowMat};
use faer::traits::ComplexField;

use crate::core::traits::CsrIndex;
use crate::error::CsrError;

/// A validated, read-only view of a CSR matrix over caller-owned arrays.
#[derive(Debug, Clone, Copy)]
pub struct CsrView<'a, I, T> {
    nrows: usize,
    ncols: usize,
    row_ptr: &'a [I],
    col_idx: &'a [I],
    values: &'a [T],
}

impl<'a, I: CsrIndex, T> CsrView<'a, I, T> {
    /// Wrap raw CSR arrays, checking the layout contract.
    ///
    /// This is O(nrows + nnz). Build the view once and hand it to as many
    /// kernel calls as needed.
    pub fn new(
        nrows: usize,
        ncols: usize,
        row_ptr: &'a [I],
        col_idx: &'a [I],
        values: &'a [T],
    ) -> Result<Self, CsrError> {
        if row_ptr.len() != nrows + 1 {
            return Err(CsrError::RowPtrLength {
                expected: nrows + 1,
                found: row_ptr.len(),
            });
        }
        let mut prev = 0usize;
        for (i, &p) in row_ptr.iter().enumerate() {
            let p = p.try_index().ok_or(CsrError::RowPtrNegative(i))?;
            if i == 0 && p != 0 {
                return Err(CsrError::RowPtrStart);
            }
            if p < prev {
                return Err(CsrError::RowPtrDecreasing(i - 1));
            }
            prev = p;
        }
        if prev != col_idx.len() || prev != values.len() {
            return Err(CsrError::NnzMismatch {
                row_ptr_end: prev,
                col_idx_len: col_idx.len(),
                values_len: values.len(),
            });
        }
        for (pos, &j) in col_idx.iter().enumerate() {
            match j.try_index() {
                Some(j) if j < ncols => {}
                _ => return Err(CsrError::ColumnOutOfBounds { pos, ncols }),
            }
        }
        Ok(Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries, duplicates included.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn row_ptr(&self) -> &'a [I] {
        self.row_ptr
    }

    pub fn col_idx(&self) -> &'a [I] {
        self.col_idx
    }

    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Positions of row `i`'s entries inside `col_idx` / `values`.
    #[inline]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        self.row_ptr[i].as_usize()..self.row_ptr[i + 1].as_usize()
    }

    /// `(column, value)` pairs of row `i` in storage order.
    #[inline]
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, T)> + use<'a, I, T>
    where
        T: Copy,
    {
        let range = self.row_range(i);
        let (col_idx, values) = (self.col_idx, self.values);
        col_idx[range.clone()]
            .iter()
            .zip(&values[range])
            .map(|(&j, &v)| (j.as_usize(), v))
    }

    /// True when every row lists its columns in strictly increasing order.
    pub fn has_sorted_indices(&self) -> bool {
        (0..self.nrows).all(|i| {
            self.col_idx[self.row_range(i)]
                .windows(2)
                .all(|w| w[0].as_usize() < w[1].as_usize())
        })
    }
}

/// Owned CSR matrix. Holds the three arrays and lends out [`CsrView`]s.
#[derive(Debug, Clone)]
pub struct CsrMatrix<I, T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<I>,
    col_idx: Vec<I>,
    values: Vec<T>,
}

impl<I: CsrIndex, T> CsrMatrix<I, T> {
    /// Build a CSR from raw row-ptr, col-idx, and values.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<I>,
        col_idx: Vec<I>,
        values: Vec<T>,
    ) -> Result<Self, CsrError> {
        CsrView::new(nrows, ncols, &row_ptr, &col_idx, &values)?;
        Ok(Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        })
    }

    pub fn as_view(&self) -> CsrView<'_, I, T> {
        // Layout was checked in `from_csr` and the arrays are not mutable since.
        CsrView {
            nrows: self.nrows,
            ncols: self.ncols,
            row_ptr: &self.row_ptr,
            col_idx: &self.col_idx,
            values: &self.values,
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Give the arrays back as `(row_ptr, col_idx, values)`.
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<T>) {
        (self.row_ptr, self.col_idx, self.values)
    }
}

impl<I: CsrIndex, T: ComplexField + Copy> CsrMatrix<I, T> {
    /// Convert to a faer `SparseRowMat` for use with faer's sparse and dense
    /// routines. faer requires strictly increasing columns in each row, so
    /// matrices with unsorted or duplicate columns are refused.
    pub fn to_faer(&self) -> Result<SparseRowMat<usize, T>, CsrError> {
        if !self.as_view().has_sorted_indices() {
            return Err(CsrError::Unsupported(
                "faer conversion needs strictly increasing columns per row",
            ));
        }
        let row_ptr = self.row_ptr.iter().map(|p| p.as_usize()).collect();
        let col_idx = self.col_idx.iter().map(|j| j.as_usize()).collect();
        let symbolic = SymbolicSparseRowMat::new_checked(
            self.nrows,
            self.ncols,
            row_ptr,
            None, // no separate row_nnz
            col_idx,
        );
        Ok(SparseRowMat::new(symbolic, self.values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_view() {
        // 3×3 identity in CSR: row_ptr=[0,1,2,3], col_idx=[0,1,2], vals=[1,1,1]
        let (rp, ci, v) = (vec![0usize, 1, 2, 3], vec![0usize, 1, 2], vec![1.0, 1.0, 1.0]);
        let a = CsrView::new(3, 3, &rp, &ci, &v).unwrap();
        assert_eq!(a.nnz(), 3);
        assert!(a.is_square());
        assert!(a.has_sorted_indices());
        assert_eq!(a.row(1).collect::<Vec<_>>(), vec![(1, 1.0)]);
    }

    #[test]
    fn empty_rows_are_allowed() {
        let rp = [0i32, 0, 2, 2];
        let ci = [2i32, 0];
        let v = [5.0f32, 6.0];
        let a = CsrView::new(3, 3, &rp, &ci, &v).unwrap();
        assert_eq!(a.row(0).count(), 0);
        assert_eq!(a.row(1).collect::<Vec<_>>(), vec![(2, 5.0), (0, 6.0)]);
        assert!(!a.has_sorted_indices());
    }

    #[test]
    fn rejects_bad_row_ptr_length() {
        let err = CsrView::new(3, 3, &[0usize, 1, 2], &[0, 1], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, CsrError::RowPtrLength { expected: 4, found: 3 });
    }

    #[test]
    fn rejects_nonzero_start() {
        let err = CsrView::new(1, 1, &[1usize, 1], &[0], &[1.0]).unwrap_err();
        assert_eq!(err, CsrError::RowPtrStart);
    }

    #[test]
    fn rejects_negative_and_decreasing_row_ptr() {
        let err = CsrView::new(2, 2, &[0i32, -1, 0], &[], &[] as &[f64]).unwrap_err();
        assert_eq!(err, CsrError::RowPtrNegative(1));
        let err = CsrView::new(2, 2, &[0i32, 2, 1], &[0, 1], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, CsrError::RowPtrDecreasing(1));
    }

    #[test]
    fn rejects_nnz_mismatch() {
        let err = CsrView::new(1, 2, &[0usize, 2], &[0, 1], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            CsrError::NnzMismatch { row_ptr_end: 2, col_idx_len: 2, values_len: 1 }
        );
    }

    #[test]
    fn rejects_column_out_of_range() {
        let err = CsrView::new(1, 2, &[0usize, 2], &[0, 2], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, CsrError::ColumnOutOfBounds { pos: 1, ncols: 2 });
        let err = CsrView::new(1, 2, &[0i64, 1], &[-1], &[1.0]).unwrap_err();
        assert_eq!(err, CsrError::ColumnOutOfBounds { pos: 0, ncols: 2 });
    }

    #[test]
    fn faer_round_trip_dense() {
        // 2×3 matrix [[1,2,0],[0,3,4]]
        let m = CsrMatrix::from_csr(
            2, 3,
            vec![0usize, 2, 4],
            vec![0, 1, 1, 2],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        let dense = m.to_faer().unwrap().to_dense();
        assert_eq!(dense[(0, 1)], 2.0);
        assert_eq!(dense[(1, 0)], 0.0);
        assert_eq!(dense[(1, 2)], 4.0);
    }

    #[test]
    fn faer_refuses_duplicates() {
        let m = CsrMatrix::from_csr(1, 1, vec![0u32, 2], vec![0, 0], vec![1.0, 1.0]).unwrap();
        assert!(matches!(m.to_faer(), Err(CsrError::Unsupported(_))));
    }
}
