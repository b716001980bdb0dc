use crate::error::{Result, check_even};
use crate::matrix::Matrix;
use crate::matrix::transpose::transpose;

use super::cos_table::CosTable;

/// Forward 2D DCT as row pass + column pass.
///
/// Same contract and error behavior as
/// [`dct2_direct`](crate::direct::forward::dct2_direct).
pub fn dct2_separable(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    run(src, dst, CosTable::dct1d)
}

/// Inverse 2D DCT as row pass + column pass.
///
/// Same contract and error behavior as
/// [`idct2_direct`](crate::direct::inverse::idct2_direct).
pub fn idct2_separable(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    run(src, dst, CosTable::idct1d)
}

fn run(src: &Matrix, dst: &mut Matrix, pass: fn(&CosTable, &[f64], &mut [f64])) -> Result<()> {
    let (rows, cols) = src.dims();
    check_even(rows, cols)?;

    dst.reshape(rows, cols);
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let row_table = CosTable::new(cols);
    let col_table = CosTable::new(rows);

    // Rows: rows × cols
    let mut stage = vec![0.0; rows * cols];
    for (input, output) in src
        .as_slice()
        .chunks_exact(cols)
        .zip(stage.chunks_exact_mut(cols))
    {
        pass(&row_table, input, output);
    }

    // Columns, worked as rows of the transpose: cols × rows
    let mut stage_t = vec![0.0; rows * cols];
    transpose(&stage, &mut stage_t, rows, cols);
    for (input, output) in stage_t.chunks_exact(rows).zip(stage.chunks_exact_mut(rows)) {
        pass(&col_table, input, output);
    }

    transpose(&stage, dst.as_mut_slice(), cols, rows);
    Ok(())
}
