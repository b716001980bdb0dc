//! Reference transforms by direct summation.
//!
//! Every output cell is evaluated straight from the analytic definition
//! with a four-deep loop, O(R²C²) in total. These are the correctness
//! baseline the separable and threaded variants are checked against.
//!
//! Available implementations:
//! - `forward`: DCT-II, normalization on the output index
//! - `inverse`: DCT-III, normalization on the summation index

pub mod forward;
pub mod inverse;

/// Orthonormal scale for frequency `k` of an `n`-point transform:
/// `1/sqrt(n)` for the DC term, `sqrt(2/n)` otherwise.
#[inline]
pub fn norm(k: usize, n: usize) -> f64 {
    let n = n as f64;
    if k == 0 { 1.0 / n.sqrt() } else { (2.0 / n).sqrt() }
}

/// `cos(π/n · (sample + 0.5) · freq)`, the DCT-II basis value.
#[inline]
pub(crate) fn basis(sample: usize, freq: usize, n: usize) -> f64 {
    (std::f64::consts::PI / n as f64 * (sample as f64 + 0.5) * freq as f64).cos()
}
