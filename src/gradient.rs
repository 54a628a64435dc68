//! Vertical gradient rasterization and sampling.
//!
//! The gradient is rasterized once into an RGBA8 pixel buffer. The same
//! buffer is drawn by the strip view and read back to resolve a phase to a
//! color, so the picked color always matches what is on screen.

use std::sync::Arc;

use floem::kurbo::Size;
use floem::peniko::{self, Blob};

use crate::color::SolidColor;
use crate::constants;
use crate::error::{PaletteError, Result};
use crate::math;

/// Ordered gradient stops, evenly spaced from phase 0 (top) to 1 (bottom).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<SolidColor>,
}

impl GradientSpec {
    /// Fails with [`PaletteError::TooFewStops`] for fewer than 2 stops.
    pub fn new(stops: impl Into<Vec<SolidColor>>) -> Result<Self> {
        let stops = stops.into();
        if stops.len() < 2 {
            return Err(PaletteError::TooFewStops(stops.len()));
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[SolidColor] {
        &self.stops
    }

    /// Color of the stop at phase 0.
    pub fn first(&self) -> SolidColor {
        self.stops[0]
    }

    /// Color of the stop at phase 1.
    pub fn last(&self) -> SolidColor {
        self.stops[self.stops.len() - 1]
    }
}

/// White, red, magenta, blue, cyan, green, yellow, orange, black.
impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            stops: constants::DEFAULT_STOPS.to_vec(),
        }
    }
}

/// A rasterized gradient strip. Rows are uniform; pixels are shared
/// read-only between clones.
#[derive(Debug, Clone)]
pub struct GradientBitmap {
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    pixels: Arc<Vec<u8>>,
}

impl GradientBitmap {
    /// Wrap a pixel buffer rendered elsewhere. Nothing is validated here;
    /// [`GradientSampler::sample`] checks format and bounds on every read.
    pub fn from_raw(width: u32, height: u32, bytes_per_pixel: usize, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bytes_per_pixel,
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// The pixel buffer as a peniko image, if it is well-formed RGBA8.
    pub fn to_image(&self) -> Option<peniko::Image> {
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(constants::BYTES_PER_PIXEL)?;
        if self.bytes_per_pixel != constants::BYTES_PER_PIXEL || self.pixels.len() != expected {
            return None;
        }
        let blob = Blob::new(self.pixels.clone());
        Some(peniko::Image::new(
            blob,
            peniko::Format::Rgba8,
            self.width,
            self.height,
        ))
    }
}

/// Rasterize `stops` top-to-bottom into a `width`×`height` RGBA8 buffer.
fn rasterize_vertical_gradient(width: u32, height: u32, stops: &[SolidColor]) -> Vec<u8> {
    let row_len = width as usize * constants::BYTES_PER_PIXEL;
    let mut buf = vec![0u8; row_len * height as usize];
    for (py, row) in buf.chunks_exact_mut(row_len).enumerate() {
        let t = py as f64 / (height - 1).max(1) as f64; // 0 at top, 1 at bottom
        let px = math::color_at(stops, t).to_rgba8();
        for dst in row.chunks_exact_mut(constants::BYTES_PER_PIXEL) {
            dst.copy_from_slice(&px);
        }
    }
    buf
}

/// Physical raster dimensions for a logical `size` at device `scale`.
fn raster_dims(size: Size, scale: f64) -> Result<(u32, u32)> {
    let s = scale.max(1.0);
    let pw = (size.width * s).round();
    let ph = (size.height * s).round();
    let max = constants::MAX_RASTER_SIDE as f64;
    let too_large = pw > max || ph > max || pw * ph > constants::MAX_RASTER_PIXELS as f64;
    if !(pw.is_finite() && ph.is_finite()) || pw < 1.0 || ph < 1.0 || too_large {
        return Err(PaletteError::Unavailable {
            width: if pw.is_finite() { pw.max(0.0) as u32 } else { u32::MAX },
            height: if ph.is_finite() { ph.max(0.0) as u32 } else { u32::MAX },
        });
    }
    Ok((pw as u32, ph as u32))
}

/// Builds gradient bitmaps and resolves phases to colors.
pub struct GradientSampler;

impl GradientSampler {
    /// Rasterize `spec` at `size` (logical units) times `scale`.
    ///
    /// Scales below 1.0 are treated as 1.0. Returns
    /// [`PaletteError::Unavailable`] when the raster would be empty or too
    /// large to allocate.
    pub fn build(spec: &GradientSpec, size: Size, scale: f64) -> Result<GradientBitmap> {
        let (width, height) = raster_dims(size, scale)?;
        let pixels = rasterize_vertical_gradient(width, height, spec.stops());
        Ok(GradientBitmap::from_raw(
            width,
            height,
            constants::BYTES_PER_PIXEL,
            pixels,
        ))
    }

    /// Bitmap row that `phase` reads from.
    pub fn row_for_phase(bitmap: &GradientBitmap, phase: f64) -> u32 {
        math::row_for_phase(phase, bitmap.height)
    }

    /// Read the color at `phase` (clamped to 0.0–1.0) from the center column.
    pub fn sample(bitmap: &GradientBitmap, phase: f64) -> Result<SolidColor> {
        if bitmap.pixels.is_empty() || bitmap.width == 0 || bitmap.height == 0 {
            return Err(PaletteError::Unreadable);
        }
        if bitmap.bytes_per_pixel != constants::BYTES_PER_PIXEL {
            return Err(PaletteError::UnsupportedFormat {
                bytes_per_pixel: bitmap.bytes_per_pixel,
            });
        }

        let len = bitmap.pixels.len();
        let row = Self::row_for_phase(bitmap, phase) as usize;
        let col = (bitmap.width / 2) as usize;
        let index = row
            .checked_mul(bitmap.width as usize)
            .and_then(|i| i.checked_add(col))
            .and_then(|i| i.checked_mul(constants::BYTES_PER_PIXEL))
            .ok_or(PaletteError::OutOfBounds {
                index: usize::MAX,
                len,
            })?;
        let px: [u8; 4] = index
            .checked_add(constants::BYTES_PER_PIXEL)
            .and_then(|end| bitmap.pixels.get(index..end))
            .and_then(|px| px.try_into().ok())
            .ok_or(PaletteError::OutOfBounds { index, len })?;
        Ok(SolidColor::from_rgba8(px))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    spec: GradientSpec,
    dims: (u32, u32),
}

/// Single-entry bitmap cache keyed by (spec, raster dimensions).
#[derive(Debug, Default)]
pub struct GradientCache {
    key: Option<CacheKey>,
    bitmap: Option<GradientBitmap>,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bitmap for `spec` at `size`×`scale`, rebuilt only when the
    /// spec or the raster dimensions change. A failed build empties the cache.
    pub fn bitmap(
        &mut self,
        spec: &GradientSpec,
        size: Size,
        scale: f64,
    ) -> Result<&GradientBitmap> {
        let dims = match raster_dims(size, scale) {
            Ok(dims) => dims,
            Err(err) => {
                self.clear();
                return Err(err);
            }
        };
        let hit = self.bitmap.is_some()
            && self
                .key
                .as_ref()
                .is_some_and(|k| k.dims == dims && k.spec == *spec);
        if !hit {
            tracing::debug!(width = dims.0, height = dims.1, "rebuilding gradient bitmap");
            match GradientSampler::build(spec, size, scale) {
                Ok(bitmap) => {
                    self.key = Some(CacheKey {
                        spec: spec.clone(),
                        dims,
                    });
                    self.bitmap = Some(bitmap);
                }
                Err(err) => {
                    self.clear();
                    return Err(err);
                }
            }
        }
        self.bitmap.as_ref().ok_or(PaletteError::Unreadable)
    }

    /// The last successfully built bitmap, if any.
    pub fn current(&self) -> Option<&GradientBitmap> {
        self.bitmap.as_ref()
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.bitmap = None;
    }
}
