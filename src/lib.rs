//! Orthonormal 2D discrete cosine transform in Rust, by direct summation.
//!
//! The forward transform is the 2D DCT-II and the inverse is the matching
//! DCT-III. With the `1/sqrt(N)` / `sqrt(2/N)` scaling they form an exact
//! inverse pair and preserve energy (sum of squares). Both sides of the
//! matrix must be even.
//!
//! ## Usage
//!
//! ```
//! use dct2::{Matrix, forward, inverse};
//!
//! let x = Matrix::new(2, 2, vec![6.0, 1.0,
//!                                6.0, 1.0]);
//!
//! let coeffs = forward(&x)?;
//! let back = inverse(&coeffs)?;
//!
//! assert!(back.approx_eq(&x, 1e-10));
//! # Ok::<(), dct2::DctError>(())
//! ```
//!
//! To reuse an output buffer, use the `_into` variants. The buffer is
//! reshaped to match the input and fully overwritten:
//!
//! ```
//! use dct2::{Matrix, forward_into};
//!
//! let x = Matrix::new(4, 2, (0..8).map(f64::from).collect());
//! let mut dst = Matrix::zeros(1, 1);
//!
//! forward_into(&x, &mut dst)?;
//! assert_eq!(dst.dims(), (4, 2));
//! # Ok::<(), dct2::DctError>(())
//! ```
//!
//! Odd shapes are rejected before anything is computed:
//!
//! ```
//! use dct2::{DctError, Matrix, forward};
//!
//! let x = Matrix::zeros(3, 4);
//! assert_eq!(forward(&x), Err(DctError::InvalidDimension { rows: 3, cols: 4 }));
//! ```
//!
//! ## What's inside
//!
//! - Direct O(R²C²) kernels, straight from the definition
//! - Separable two-pass kernels with a precomputed cosine table
//! - Multi-threaded direct kernels (rows of the output split across threads)

pub mod direct;
pub mod error;
pub mod matrix;
pub mod separable;
pub mod threaded;

pub use direct::forward::dct2_direct;
pub use direct::inverse::idct2_direct;
pub use error::{DctError, Result};
pub use matrix::Matrix;
pub use separable::two_pass::{dct2_separable, idct2_separable};

/// Forward 2D DCT into a freshly allocated matrix.
///
/// # Errors
///
/// [`DctError::InvalidDimension`] if either dimension is odd.
pub fn forward(src: &Matrix) -> Result<Matrix> {
    let mut dst = Matrix::default();
    forward_into(src, &mut dst)?;
    Ok(dst)
}

/// Forward 2D DCT into `dst`, which is reshaped to `src`'s dimensions.
///
/// On error `dst` is left as it was.
pub fn forward_into(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    dct2_direct(src, dst)
}

/// Inverse 2D DCT into a freshly allocated matrix.
///
/// # Errors
///
/// [`DctError::InvalidDimension`] if either dimension is odd.
pub fn inverse(src: &Matrix) -> Result<Matrix> {
    let mut dst = Matrix::default();
    inverse_into(src, &mut dst)?;
    Ok(dst)
}

/// Inverse 2D DCT into `dst`, which is reshaped to `src`'s dimensions.
///
/// On error `dst` is left as it was.
pub fn inverse_into(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    idct2_direct(src, dst)
}

/// Same as [`forward_into`] but uses multiple threads.
///
/// Thread count adapts to matrix size - small matrices use fewer threads
/// because the overhead isn't worth it.
pub fn forward_parallel(src: &Matrix, dst: &mut Matrix, num_threads: usize) -> Result<()> {
    threaded::dct_mt::dct2_direct_mt(src, dst, num_threads)
}

/// Same as [`inverse_into`] but uses multiple threads.
pub fn inverse_parallel(src: &Matrix, dst: &mut Matrix, num_threads: usize) -> Result<()> {
    threaded::dct_mt::idct2_direct_mt(src, dst, num_threads)
}
