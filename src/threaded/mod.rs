//! Multi-threaded direct transforms.
//!
//! These split the output rows (k1) across threads, each thread running
//! the direct kernel on its own block of rows. Every output cell is
//! written by exactly one thread and no cell reads another, so no locking
//! is involved. Thread count adapts to the amount of work - small matrices
//! use fewer threads to avoid overhead.
//!
//! Available implementations:
//! - `dct_mt`: threaded forward and inverse

pub mod dct_mt;

/// Work (multiply-adds) below which a single thread is used.
pub const SINGLE_THREAD_THRESHOLD: f64 = 2_000_000.0;
/// Work below which at most two threads are used.
pub const TWO_THREAD_THRESHOLD: f64 = 8_000_000.0;

/// Picks how many threads to use for a `rows × cols` transform.
///
/// - < `SINGLE_THREAD_THRESHOLD` multiply-adds: 1 thread
/// - < `TWO_THREAD_THRESHOLD`: 2 threads
/// - Otherwise: up to `max_threads`
///
/// Never more threads than output rows, never fewer than one.
pub fn choose_thread_count(rows: usize, cols: usize, max_threads: usize) -> usize {
    let work = (rows * cols) as f64 * (rows * cols) as f64;

    let optimal_threads = if work < SINGLE_THREAD_THRESHOLD {
        1
    } else if work < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    optimal_threads.min(rows).min(max_threads).max(1)
}
