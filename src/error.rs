//! Error type for the transforms.

use thiserror::Error;

/// Failure returned by every transform entry point.
///
/// Raised before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DctError {
    /// Row or column count is odd.
    #[error("dct: matrix dimensions must be even, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, DctError>;

/// Rejects odd shapes.
pub(crate) fn check_even(rows: usize, cols: usize) -> Result<()> {
    if rows % 2 != 0 || cols % 2 != 0 {
        log::debug!("rejecting {}x{} matrix: odd dimension", rows, cols);
        return Err(DctError::InvalidDimension { rows, cols });
    }
    Ok(())
}
