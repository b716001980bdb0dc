//! Two-pass (separable) transforms.
//!
//! The 2D basis factors into a row transform and a column transform, so
//! the same result can be had in O(RC(R+C)) by running a 1D DCT over every
//! row, transposing, running a 1D DCT over every row again and transposing
//! back. Only the floating-point summation order differs from the direct
//! kernels.
//!
//! Available implementations:
//! - `cos_table`: precomputed 1D basis and normalization for one length
//! - `two_pass`: 2D forward/inverse built on top of it

pub mod cos_table;
pub mod two_pass;
