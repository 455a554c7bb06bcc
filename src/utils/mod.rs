//! Diagnostic helpers that sit outside the numeric kernels.

pub mod display;
pub use display::BlockDisplay;
