//! PaletteColor — an immutable snapshot of the current selection.

use crate::color::SolidColor;
use crate::math;

/// A sampled color together with the phase (0.0 top – 1.0 bottom) it was
/// sampled at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    color: SolidColor,
    phase: f64,
}

impl PaletteColor {
    /// Pair `color` with the phase that produced it. `phase` is clamped to
    /// 0.0–1.0; NaN becomes 0.0.
    pub fn new(color: SolidColor, phase: f64) -> Self {
        Self {
            color,
            phase: math::clamp_phase(phase),
        }
    }

    pub fn color(&self) -> SolidColor {
        self.color
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

/// White at phase 0. Also the fallback whenever sampling fails.
impl Default for PaletteColor {
    fn default() -> Self {
        Self {
            color: SolidColor::WHITE,
            phase: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_at_top() {
        let d = PaletteColor::default();
        assert_eq!(d.color(), SolidColor::WHITE);
        assert_eq!(d.phase(), 0.0);
    }

    #[test]
    fn phase_is_clamped() {
        assert_eq!(PaletteColor::new(SolidColor::BLACK, 1.7).phase(), 1.0);
        assert_eq!(PaletteColor::new(SolidColor::BLACK, -0.3).phase(), 0.0);
        assert_eq!(PaletteColor::new(SolidColor::BLACK, f64::NAN).phase(), 0.0);
    }
}
