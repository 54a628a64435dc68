//! SolidColor type — the color representation sampled from the gradient.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Pixel buffers hold 8-bit
//! channels, so most conversions go through `u8`.

use floem::peniko::Color;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const WHITE: Self = Self::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::from_rgba(0.0, 0.0, 0.0, 1.0);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8([r, g, b, 255])
    }

    /// Create from a 4-byte RGBA pixel.
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self {
            r: px[0] as f64 / 255.0,
            g: px[1] as f64 / 255.0,
            b: px[2] as f64 / 255.0,
            a: px[3] as f64 / 255.0,
        }
    }

    /// Convert to a 4-byte RGBA pixel, clamping out-of-range channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Format as uppercase RRGGBB (no `#` prefix, alpha dropped).
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Largest per-channel difference to `other`, alpha included.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<SolidColor> for Color {
    fn from(c: SolidColor) -> Self {
        Color::rgba(c.r, c.g, c.b, c.a)
    }
}
