//! Threaded forward/inverse transforms.

use std::thread;

use crate::direct::forward::dct2_direct_rows;
use crate::direct::inverse::idct2_direct_rows;
use crate::error::{Result, check_even};
use crate::matrix::Matrix;

use super::choose_thread_count;

/// Multi-threaded [`dct2_direct`](crate::direct::forward::dct2_direct).
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn dct2_direct_mt(src: &Matrix, dst: &mut Matrix, num_threads: usize) -> Result<()> {
    run(src, dst, num_threads, dct2_direct_rows)
}

/// Multi-threaded [`idct2_direct`](crate::direct::inverse::idct2_direct).
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn idct2_direct_mt(src: &Matrix, dst: &mut Matrix, num_threads: usize) -> Result<()> {
    run(src, dst, num_threads, idct2_direct_rows)
}

fn run(
    src: &Matrix,
    dst: &mut Matrix,
    num_threads: usize,
    kernel: fn(&Matrix, &mut [f64], usize),
) -> Result<()> {
    let (rows, cols) = src.dims();
    check_even(rows, cols)?;

    dst.reshape(rows, cols);
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let effective_threads = choose_thread_count(rows, cols, num_threads);
    log::debug!(
        "dct {}x{}: {} thread(s) (requested {})",
        rows,
        cols,
        effective_threads,
        num_threads
    );

    if effective_threads == 1 {
        kernel(src, dst.as_mut_slice(), 0);
        return Ok(());
    }

    let rows_per_thread = rows.div_ceil(effective_threads);

    thread::scope(|s| {
        for (tid, block) in dst
            .as_mut_slice()
            .chunks_mut(rows_per_thread * cols)
            .enumerate()
        {
            let start_row = tid * rows_per_thread;
            log::trace!(
                "thread {}: rows {}..{}",
                tid,
                start_row,
                start_row + block.len() / cols
            );
            s.spawn(move || kernel(src, block, start_row));
        }
    });

    Ok(())
}
