//! Direct forward transform (DCT-II).

use crate::error::{Result, check_even};
use crate::matrix::Matrix;

use super::{basis, norm};

/// Forward 2D DCT by direct summation: dst = DCT-II(src)
///
/// `dst` is reshaped to the shape of `src` and every cell is overwritten:
///
/// `dst[k1,k2] = c(k1,R)·c(k2,C)·Σ src[n1,n2]·cos(π/R·(n1+½)·k1)·cos(π/C·(n2+½)·k2)`
///
/// # Errors
///
/// Returns [`DctError::InvalidDimension`](crate::DctError::InvalidDimension)
/// if either dimension of `src` is odd. `dst` is not touched in that case.
pub fn dct2_direct(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    let (rows, cols) = src.dims();
    check_even(rows, cols)?;

    dst.reshape(rows, cols);
    dct2_direct_rows(src, dst.as_mut_slice(), 0);
    Ok(())
}

/// Computes output rows `first_row..first_row + out.len() / cols` into `out`.
///
/// `out` is a row-major slice covering whole output rows. Cells are
/// independent, so disjoint row ranges can be filled concurrently.
/// Shape validation is the caller's job.
pub fn dct2_direct_rows(src: &Matrix, out: &mut [f64], first_row: usize) {
    let (rows, cols) = src.dims();
    if cols == 0 {
        return;
    }

    for (i, out_row) in out.chunks_exact_mut(cols).enumerate() {
        let k1 = first_row + i;
        let ck1 = norm(k1, rows);
        for (k2, cell) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for n1 in 0..rows {
                let cos1 = basis(n1, k1, rows);
                for n2 in 0..cols {
                    sum += src.at(n1, n2) * cos1 * basis(n2, k2, cols);
                }
            }
            *cell = ck1 * norm(k2, cols) * sum;
        }
    }
}
