//! Sizing, color, and styling constants for the palette strip.

use crate::color::SolidColor;

/// Strip width in logical units
pub const STRIP_WIDTH: f64 = 8.0;

/// Strip height in logical units
pub const STRIP_HEIGHT: f64 = 200.0;

/// Indicator ring radius
pub const INDICATOR_RADIUS: f64 = 7.0;

/// Border radius for the strip
pub const RADIUS: f64 = 4.0;

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest raster side the sampler will allocate
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Largest raster area (pixels) the sampler will allocate
pub const MAX_RASTER_PIXELS: u64 = 1 << 20;

/// Built-in gradient, top to bottom.
pub const DEFAULT_STOPS: [SolidColor; 9] = [
    SolidColor::WHITE,
    SolidColor::from_rgba(1.0, 0.0, 0.0, 1.0), // red
    SolidColor::from_rgba(1.0, 0.0, 1.0, 1.0), // magenta
    SolidColor::from_rgba(0.0, 0.0, 1.0, 1.0), // blue
    SolidColor::from_rgba(0.0, 1.0, 1.0, 1.0), // cyan
    SolidColor::from_rgba(0.0, 1.0, 0.0, 1.0), // green
    SolidColor::from_rgba(1.0, 1.0, 0.0, 1.0), // yellow
    SolidColor::from_rgba(1.0, 0.5, 0.0, 1.0), // orange
    SolidColor::BLACK,
];
