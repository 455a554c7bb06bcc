use thiserror::Error;

// Unified error type for csr-relax

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsrError {
    #[error("row_ptr has length {found}, expected nrows + 1 = {expected}")]
    RowPtrLength { expected: usize, found: usize },
    #[error("row_ptr must start at zero")]
    RowPtrStart,
    #[error("row_ptr entry {0} is negative")]
    RowPtrNegative(usize),
    #[error("row_ptr decreases at row {0}")]
    RowPtrDecreasing(usize),
    #[error("row_ptr ends at {row_ptr_end} but col_idx has {col_idx_len} and values has {values_len} entries")]
    NnzMismatch {
        row_ptr_end: usize,
        col_idx_len: usize,
        values_len: usize,
    },
    #[error("column index at position {pos} is outside [0, {ncols})")]
    ColumnOutOfBounds { pos: usize, ncols: usize },
    #[error("{what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("matrix is {nrows}x{ncols}, relaxation needs a square matrix")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("row_step must be non-zero")]
    ZeroStep,
    #[error("row_step {0} has no representable negation")]
    StepOutOfRange(isize),
    #[error("sweep visits row {row}, outside [0, {nrows})")]
    SweepOutOfBounds { row: isize, nrows: usize },
    #[error("block vectors need at least one right-hand side")]
    ZeroBlockSize,
    #[error("{nrows} rows times {nrhs} right-hand sides overflows usize")]
    BlockSizeOverflow { nrows: usize, nrhs: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
