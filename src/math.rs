//! Gradient math: phase mapping and stop interpolation.
//! Phases are normalized f64 in 0.0–1.0.

use crate::color::SolidColor;

/// Inverse lerp of `value` over `0..=extent`, clamped to 0.0–1.0.
///
/// A non-positive or non-finite extent, or a NaN value, maps to 0.0.
pub(crate) fn inverse_lerp_clamped(value: f64, extent: f64) -> f64 {
    if !(extent.is_finite() && extent > 0.0) || value.is_nan() {
        return 0.0;
    }
    (value / extent).clamp(0.0, 1.0)
}

/// Clamp a phase into 0.0–1.0; NaN becomes 0.0.
pub(crate) fn clamp_phase(phase: f64) -> f64 {
    if phase.is_nan() {
        0.0
    } else {
        phase.clamp(0.0, 1.0)
    }
}

/// Bitmap row for `phase` in a raster `height` pixels tall.
pub(crate) fn row_for_phase(phase: f64, height: u32) -> u32 {
    let last = height.saturating_sub(1);
    ((clamp_phase(phase) * last as f64).round() as u32).min(last)
}

/// Color at `t` (0.0–1.0) along evenly spaced `stops`, interpolated in sRGB.
pub(crate) fn color_at(stops: &[SolidColor], t: f64) -> SolidColor {
    match stops {
        [] => SolidColor::default(),
        [only] => *only,
        _ => {
            let segments = (stops.len() - 1) as f64;
            let pos = clamp_phase(t) * segments;
            let i = (pos.floor() as usize).min(stops.len() - 2);
            let f = pos - i as f64;
            let (a, b) = (stops[i], stops[i + 1]);
            SolidColor::from_rgba(
                a.r() + (b.r() - a.r()) * f,
                a.g() + (b.g() - a.g()) * f,
                a.b() + (b.b() - a.b()) * f,
                a.a() + (b.a() - a.a()) * f,
            )
        }
    }
}
