//! The dense matrix type the transforms read from and write into.
//!
//! Storage is row-major `f64`. The transforms only need the shape and
//! per-cell access, plus `transpose` for the separable column pass.

pub mod dense;
pub mod transpose;

pub use dense::{Matrix, different};
