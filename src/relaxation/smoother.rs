use std::fmt;

use log::debug;
use num_traits::Float;

use crate::config::RelaxOptions;
use crate::core::traits::CsrIndex;
use crate::error::CsrError;
use crate::matrix::CsrView;
use crate::relaxation::{check_relax_args, jacobi, jacobi_multi, RowSweep, SweepType};

/// Repeated Jacobi sweeps driven by [`RelaxOptions`].
///
/// Each of `iterations` passes runs a forward sweep when `FORWARD` is set and
/// then a backward sweep when `BACKWARD` is set. The smoother owns the
/// scratch vector so callers don't have to; it makes no convergence decisions.
pub struct JacobiSmoother<T> {
    opts: RelaxOptions<T>,
    temp: Vec<T>,
}

impl<T: Float> JacobiSmoother<T> {
    pub fn new(opts: RelaxOptions<T>) -> Self {
        Self { opts, temp: Vec::new() }
    }

    pub fn options(&self) -> &RelaxOptions<T> {
        &self.opts
    }

    pub fn set_omega(&mut self, omega: T) {
        self.opts.omega = omega;
    }

    pub fn set_sweep(&mut self, sweep: SweepType) {
        self.opts.sweep = sweep;
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.opts.iterations = iterations;
    }

    fn passes(&self, n: usize) -> impl Iterator<Item = RowSweep> + use<T> {
        let mut dirs = Vec::with_capacity(2);
        if self.opts.sweep.contains(SweepType::FORWARD) {
            dirs.push(RowSweep::forward(n));
        }
        if self.opts.sweep.contains(SweepType::BACKWARD) {
            dirs.push(RowSweep::backward(n));
        }
        dirs.into_iter()
    }

    /// Smooth a single vector `x` against `b`.
    pub fn smooth<I: CsrIndex>(
        &mut self,
        a: &CsrView<'_, I, T>,
        x: &mut [T],
        b: &[T],
    ) -> Result<(), CsrError> {
        self.smooth_multi(a, x, b, 1)
    }

    /// Smooth `nrhs` interleaved vectors (`x[i * nrhs + k]`) against `b`.
    pub fn smooth_multi<I: CsrIndex>(
        &mut self,
        a: &CsrView<'_, I, T>,
        x: &mut [T],
        b: &[T],
        nrhs: usize,
    ) -> Result<(), CsrError> {
        // shapes are checked even when no pass runs; scratch is sized to x
        check_relax_args(a, nrhs, &*x, b, &*x, &RowSweep::forward(a.nrows()))?;
        self.temp.resize(x.len(), T::zero());
        for it in 0..self.opts.iterations {
            for sweep in self.passes(a.nrows()) {
                debug!("jacobi smoother pass {} sweep {:?} nrhs {}", it, sweep, nrhs);
                if nrhs == 1 {
                    jacobi(a, x, b, &mut self.temp, sweep, self.opts.omega)?;
                } else {
                    jacobi_multi(a, x, b, &mut self.temp, nrhs, sweep, self.opts.omega)?;
                }
            }
        }
        Ok(())
    }
}

impl<T> fmt::Display for JacobiSmoother<T>
where
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Jacobi(omega={}, iterations={}, sweep={})",
            self.opts.omega, self.opts.iterations, self.opts.sweep
        )
    }
}
