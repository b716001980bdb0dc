//! Direct inverse transform (DCT-III).

use crate::error::{Result, check_even};
use crate::matrix::Matrix;

use super::{basis, norm};

/// Inverse 2D DCT by direct summation: dst = DCT-III(src)
///
/// Mirror of [`dct2_direct`](super::forward::dct2_direct), except the
/// normalization follows the summation index:
///
/// `dst[k1,k2] = Σ src[n1,n2]·c(n1,R)·c(n2,C)·cos(π/R·(k1+½)·n1)·cos(π/C·(k2+½)·n2)`
///
/// # Errors
///
/// Returns [`DctError::InvalidDimension`](crate::DctError::InvalidDimension)
/// if either dimension of `src` is odd. `dst` is not touched in that case.
pub fn idct2_direct(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    let (rows, cols) = src.dims();
    check_even(rows, cols)?;

    dst.reshape(rows, cols);
    idct2_direct_rows(src, dst.as_mut_slice(), 0);
    Ok(())
}

/// Computes output rows `first_row..first_row + out.len() / cols` into `out`.
///
/// Same contract as [`dct2_direct_rows`](super::forward::dct2_direct_rows).
pub fn idct2_direct_rows(src: &Matrix, out: &mut [f64], first_row: usize) {
    let (rows, cols) = src.dims();
    if cols == 0 {
        return;
    }

    for (i, out_row) in out.chunks_exact_mut(cols).enumerate() {
        let k1 = first_row + i;
        for (k2, cell) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for n1 in 0..rows {
                let w1 = norm(n1, rows) * basis(k1, n1, rows);
                for n2 in 0..cols {
                    sum += src.at(n1, n2) * w1 * norm(n2, cols) * basis(k2, n2, cols);
                }
            }
            *cell = sum;
        }
    }
}
