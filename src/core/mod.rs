//! Core traits shared by the matrix and relaxation modules.

pub mod traits;
pub use traits::CsrIndex;
