//! Construction parameters for the palette strip.

use floem::kurbo::Size;

use crate::constants;
use crate::gradient::GradientSpec;

/// Gradient stops and the logical size the gradient is rasterized at.
///
/// The raster size is independent of the size the strip is laid out at;
/// sampling works in phase space.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    pub spec: GradientSpec,
    pub strip_size: Size,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            spec: GradientSpec::default(),
            strip_size: Size::new(constants::STRIP_WIDTH, constants::STRIP_HEIGHT),
        }
    }
}

impl PaletteConfig {
    pub fn with_spec(mut self, spec: GradientSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_strip_size(mut self, strip_size: Size) -> Self {
        self.strip_size = strip_size;
        self
    }
}
