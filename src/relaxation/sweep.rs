use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::CsrError;

bitflags! {
    /// Which directions a smoother pass traverses.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SweepType: u32 {
        const FORWARD   = 0b01;
        const BACKWARD  = 0b10;
        const SYMMETRIC = Self::FORWARD.bits() | Self::BACKWARD.bits();
    }
}

impl FromStr for SweepType {
    type Err = CsrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(SweepType::FORWARD),
            "backward" => Ok(SweepType::BACKWARD),
            "symmetric" => Ok(SweepType::SYMMETRIC),
            _ => Err(CsrError::Unsupported("sweep must be forward, backward or symmetric")),
        }
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if *self == SweepType::SYMMETRIC {
            "symmetric"
        } else if *self == SweepType::BACKWARD {
            "backward"
        } else if *self == SweepType::FORWARD {
            "forward"
        } else {
            "none"
        };
        f.write_str(name)
    }
}

/// Rows `start, start + step, ...` up to but excluding `stop`.
///
/// With `step > 0` rows are visited while `< stop`, with `step < 0` while
/// `> stop`, so a full reverse sweep over `n` rows is `(n - 1, -1, -1)`.
/// A stride that does not land on `stop` ends at the last row before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSweep {
    start: isize,
    stop: isize,
    step: isize,
}

impl RowSweep {
    /// `step` must be non-zero and have a representable negation.
    pub fn new(start: isize, stop: isize, step: isize) -> Result<Self, CsrError> {
        if step == 0 {
            return Err(CsrError::ZeroStep);
        }
        if step == isize::MIN {
            return Err(CsrError::StepOutOfRange(step));
        }
        Ok(Self { start, stop, step })
    }

    /// `0, 1, ..., n - 1`.
    pub fn forward(n: usize) -> Self {
        Self { start: 0, stop: n as isize, step: 1 }
    }

    /// `n - 1, ..., 1, 0`.
    pub fn backward(n: usize) -> Self {
        Self { start: n as isize - 1, stop: -1, step: -1 }
    }

    pub fn start(&self) -> isize {
        self.start
    }

    pub fn stop(&self) -> isize {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step
    }

    /// Number of rows visited.
    pub fn len(&self) -> usize {
        // i128 holds any isize difference, so extreme bounds cannot wrap
        let (start, stop, step) = (self.start as i128, self.stop as i128, self.step as i128);
        let (span, stride) = if step > 0 { (stop - start, step) } else { (start - stop, -step) };
        if span <= 0 { 0 } else { ((span - 1) / stride + 1) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First and last visited row, in traversal order. Both lie between
    /// `start` and `stop`, so they fit in `isize`.
    fn endpoints(&self) -> Option<(isize, isize)> {
        match self.len() {
            0 => None,
            len => {
                let last = self.start as i128 + self.step as i128 * (len as i128 - 1);
                Some((self.start, last as isize))
            }
        }
    }

    /// The same rows traversed in the opposite order, or `None` when the
    /// exclusive stop of the reversed range does not fit in `isize`.
    pub fn reversed(&self) -> Option<Self> {
        let step = self.step.checked_neg()?;
        match self.endpoints() {
            Some((first, last)) => {
                Some(Self { start: last, stop: first.checked_sub(self.step)?, step })
            }
            None => Some(Self { start: self.start, stop: self.start, step }),
        }
    }

    /// Fails unless every visited row lies in `[0, nrows)`.
    pub fn check_bounds(&self, nrows: usize) -> Result<(), CsrError> {
        if let Some((first, last)) = self.endpoints() {
            for row in [first, last] {
                if row < 0 || row as usize >= nrows {
                    return Err(CsrError::SweepOutOfBounds { row, nrows });
                }
            }
        }
        Ok(())
    }

    /// Smallest contiguous row range holding every visited row.
    /// Only meaningful once [`check_bounds`](Self::check_bounds) passed.
    pub fn span(&self) -> Range<usize> {
        match self.endpoints() {
            Some((first, last)) => first.min(last) as usize..first.max(last) as usize + 1,
            None => 0..0,
        }
    }

    /// Whether row `i` is visited.
    pub fn contains(&self, i: usize) -> bool {
        let Some((first, last)) = self.endpoints() else {
            return false;
        };
        let i = i as i128;
        let (lo, hi) = (first.min(last) as i128, first.max(last) as i128);
        i >= lo && i <= hi && (i - self.start as i128) % self.step as i128 == 0
    }

    /// Visited rows in traversal order. Call [`check_bounds`](Self::check_bounds) first.
    pub fn rows(&self) -> impl Iterator<Item = usize> + use<> {
        let (start, step) = (self.start as i128, self.step as i128);
        (0..self.len()).map(move |k| (start + step * k as i128) as usize)
    }
}
