//! Rayon work-splitting helpers shared by the parallel kernels.

use rayon::ThreadPoolBuilder;

/// Rows per Rayon task below which splitting further costs more than it saves.
const MIN_ROWS: usize = 256;

/// Size the global Rayon pool. `None` uses one thread per logical CPU.
///
/// Only the first call in a process has an effect; later calls return `false`.
pub fn init_thread_pool(threads: Option<usize>) -> bool {
    ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or_else(num_cpus::get))
        .build_global()
        .is_ok()
}

/// Minimum rows handed to a single task when `nrows` rows are split across the pool.
pub fn min_rows_per_task(nrows: usize) -> usize {
    let per_cpu = nrows / (4 * num_cpus::get().max(1));
    per_cpu.max(MIN_ROWS)
}
