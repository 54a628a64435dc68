//! Failure kinds for gradient construction and sampling.

use thiserror::Error;

/// Errors produced while building or sampling a gradient bitmap.
///
/// None of these are fatal: [`PaletteController`](crate::PaletteController)
/// logs them and falls back to [`PaletteColor::default`](crate::PaletteColor).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("a gradient needs at least 2 stops, got {0}")]
    TooFewStops(usize),
    #[error("cannot rasterize a {width}x{height} gradient")]
    Unavailable { width: u32, height: u32 },
    #[error("gradient bitmap has no readable pixel data")]
    Unreadable,
    #[error("unsupported pixel format: {bytes_per_pixel} bytes per pixel (expected 4)")]
    UnsupportedFormat { bytes_per_pixel: usize },
    #[error("pixel index {index} out of bounds for buffer of {len} bytes")]
    OutOfBounds { index: usize, len: usize },
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
