//! Vertical gradient palette strip.
//!
//! Draws the controller's rasterized gradient and a ring indicator at the
//! selected phase. Every pointer event that reaches the strip is consumed,
//! so a drag that starts here is never taken over by a sibling view.

use std::rc::Rc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::config::PaletteConfig;
use crate::constants;
use crate::controller::{PaletteController, SelectionListener};
use crate::palette_color::PaletteColor;

/// Pushed from the selection signal when the host changes it.
struct RestoreSelection(PaletteColor);

pub struct PaletteStrip {
    id: ViewId,
    controller: PaletteController,
    /// Keeps the controller's weak listener alive for the life of the view.
    _repaint: Rc<dyn SelectionListener>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(PaletteColor)>>,
    /// Cached gradient image, rebuilt when the controller's bitmap changes.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a palette strip with the built-in 9-stop gradient.
///
/// The strip reads from and writes to `selection`. External writes move the
/// indicator without re-sampling; user picks update the signal.
pub fn gradient_palette(selection: RwSignal<PaletteColor>) -> PaletteStrip {
    gradient_palette_with(selection, PaletteConfig::default())
}

/// Creates a palette strip with custom stops or raster size.
pub fn gradient_palette_with(
    selection: RwSignal<PaletteColor>,
    config: PaletteConfig,
) -> PaletteStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        let current = selection.get();
        id.update_state(RestoreSelection(current));
    });

    let strip_size = config.strip_size;
    let mut controller = PaletteController::new(selection.get_untracked(), config);
    let repaint: Rc<dyn SelectionListener> = Rc::new(move || id.request_paint());
    controller.set_listener(&repaint);

    PaletteStrip {
        id,
        controller,
        _repaint: repaint,
        size: Default::default(),
        on_change: Some(Box::new(move |picked| {
            if selection.get_untracked() != picked {
                selection.set(picked);
            }
        })),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.width(strip_size.width as f32)
            .height(strip_size.height as f32)
            .border_radius(constants::RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl PaletteStrip {
    fn track_height(&self) -> f64 {
        self.size.height as f64
    }

    fn emit(&self, picked: Option<PaletteColor>) {
        if let (Some(picked), Some(cb)) = (picked, &self.on_change) {
            cb(picked);
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        self.controller.set_scale(scale);
        let Some(bitmap) = self.controller.cache().current() else {
            self.grad_img = None;
            self.cached_dims = (0, 0);
            return;
        };
        let dims = (bitmap.width(), bitmap.height());
        if self.grad_img.is_some() && self.cached_dims == dims {
            return;
        }
        let Some(img) = bitmap.to_image() else {
            return;
        };

        self.grad_hash = img.data.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_dims = dims;
    }
}

impl View for PaletteStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<RestoreSelection>() {
            self.controller.restore(update.0);
            self.id.request_paint();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
        let h = self.track_height();
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let picked = self.controller.pointer_down(e.pos.y, h);
                self.emit(Some(picked));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let picked = self.controller.pointer_move(e.pos.y, h);
                self.emit(picked);
                EventPropagation::Stop
            }
            Event::PointerUp(e) => {
                let picked = self.controller.pointer_up(e.pos.y, h);
                self.emit(picked);
                EventPropagation::Stop
            }
            Event::FocusLost => {
                // No coordinate on focus loss; end the drag where it was.
                let y = self.controller.indicator_offset(h);
                let picked = self.controller.pointer_cancel(y, h);
                self.emit(picked);
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_gradient_image(cx.scale());
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        } else {
            // Gradient unavailable: show the fallback color.
            cx.fill(&rect, Color::from(PaletteColor::default().color()), 0.0);
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // Indicator ring filled with the selected color
        let selection = self.controller.current_selection();
        let center = (w / 2.0, self.controller.indicator_offset(h));
        let radius = constants::INDICATOR_RADIUS;
        let fill = Circle::new(center, radius - 1.5);
        cx.fill(&fill, Color::from(selection.color()), 0.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
    }
}
