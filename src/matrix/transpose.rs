/// Transpose a row-major matrix: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows), so
/// column j of src becomes row j of dst. The separable transforms use this
/// to run their column pass as a second row pass.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Example
///
/// ```
/// use dct2::matrix::transpose::transpose;
///
/// let src = vec![0.5, -1.0,    // 3×2 matrix
///                2.0,  4.0,
///                8.0,  0.0];
/// let mut dst = vec![0.0; 6];  // will be 2×3
///
/// transpose(&src, &mut dst, 3, 2);
///
/// assert_eq!(dst, vec![0.5, 2.0, 8.0,
///                      -1.0, 4.0, 0.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);
    for (i, src_row) in src.chunks_exact(cols.max(1)).take(rows).enumerate() {
        for (j, &v) in src_row.iter().enumerate() {
            dst[j * rows + i] = v;
        }
    }
}
