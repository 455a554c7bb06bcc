//! Options for Jacobi smoothing passes.
//!
//! `RelaxOptions` collects the parameters a solver driver picks per
//! smoothing step: the damping factor, the sweep direction(s), and how many
//! passes to run. The sweep can be given by name ("forward", "backward",
//! "symmetric") through [`RelaxOptions::with_sweep_name`].

use crate::error::CsrError;
use crate::relaxation::SweepType;

/// Jacobi smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxOptions<T> {
    /// Damping factor ω
    pub omega: T,

    /// Direction(s) of each pass
    pub sweep: SweepType,

    /// Number of passes
    pub iterations: usize,
}

impl<T: num_traits::Float> Default for RelaxOptions<T> {
    fn default() -> Self {
        Self { omega: T::one(), sweep: SweepType::FORWARD, iterations: 1 }
    }
}

impl<T> RelaxOptions<T> {
    pub fn new(omega: T, sweep: SweepType, iterations: usize) -> Self {
        Self { omega, sweep, iterations }
    }

    /// Replace the sweep with one parsed from its name.
    pub fn with_sweep_name(mut self, name: &str) -> Result<Self, CsrError> {
        self.sweep = name.parse()?;
        Ok(self)
    }
}
