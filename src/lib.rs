//! # floem-palette
//!
//! A vertical gradient palette strip for [Floem](https://github.com/lapce/floem).
//!
//! The user drags along the strip to pick a color. The strip reports the
//! sampled color together with its normalized position (phase, 0.0 at the
//! top, 1.0 at the bottom). Gradient rasterization, sampling, and the
//! selection controller work without a window and can be driven directly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_palette::{gradient_palette, PaletteColor};
//!
//! let selection = RwSignal::new(PaletteColor::default());
//! // Use `gradient_palette(selection)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod controller;
mod error;
mod gradient;
mod math;
mod palette_color;
mod palette_strip;

pub use color::SolidColor;
pub use config::PaletteConfig;
pub use controller::{DragState, PaletteController, SelectionListener};
pub use error::{PaletteError, Result};
pub use gradient::{GradientBitmap, GradientCache, GradientSampler, GradientSpec};
pub use palette_color::PaletteColor;
pub use palette_strip::{gradient_palette, gradient_palette_with, PaletteStrip};
