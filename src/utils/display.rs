//! Text dump of row-major block vectors, one row per line.

use std::fmt;

/// Formats `data` as `data.len() / nrhs` lines of `nrhs` space-separated
/// values. Meant for debugging kernel inputs and outputs.
///
/// ```
/// use csr_relax::utils::BlockDisplay;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(BlockDisplay::new(&x, 2).to_string(), "1 2\n3 4\n");
/// ```
pub struct BlockDisplay<'a, T> {
    data: &'a [T],
    nrhs: usize,
}

impl<'a, T> BlockDisplay<'a, T> {
    /// `nrhs == 0` is treated as a single column.
    pub fn new(data: &'a [T], nrhs: usize) -> Self {
        Self { data, nrhs: nrhs.max(1) }
    }
}

impl<T: fmt::Display> fmt::Display for BlockDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.nrhs) {
            for (k, v) in row.iter().enumerate() {
                if k > 0 {
                    f.write_str(" ")?;
                }
                // honour width/precision flags for each entry
                fmt::Display::fmt(v, f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
