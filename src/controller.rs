//! Selection state and pointer-to-phase mapping.
//!
//! [`PaletteController`] is independent of any view: it takes pointer
//! Y-coordinates and a track height, and owns the resulting
//! [`PaletteColor`]. The Floem strip forwards its pointer events here.

use std::rc::{Rc, Weak};

use crate::config::PaletteConfig;
use crate::error::{PaletteError, Result};
use crate::gradient::{GradientCache, GradientSampler};
use crate::math;
use crate::palette_color::PaletteColor;

/// Receives a payload-free notification whenever the user makes a new
/// selection. Read [`PaletteController::current_selection`] for the value.
pub trait SelectionListener {
    fn selection_changed(&self);
}

impl<F: Fn()> SelectionListener for F {
    fn selection_changed(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

pub struct PaletteController {
    config: PaletteConfig,
    scale: f64,
    cache: GradientCache,
    selection: PaletteColor,
    drag: DragState,
    listener: Option<Weak<dyn SelectionListener>>,
}

impl PaletteController {
    /// Build the gradient at scale 1.0 and show `initial`.
    ///
    /// If the gradient cannot be built, the failure is logged and every
    /// later selection resolves to [`PaletteColor::default`].
    pub fn new(initial: PaletteColor, config: PaletteConfig) -> Self {
        let mut controller = Self {
            config,
            scale: 1.0,
            cache: GradientCache::new(),
            selection: initial,
            drag: DragState::Idle,
            listener: None,
        };
        controller.rebuild();
        controller
    }

    fn rebuild(&mut self) {
        if let Err(err) = self
            .cache
            .bitmap(&self.config.spec, self.config.strip_size, self.scale)
        {
            tracing::warn!(
                %err,
                scale = self.scale,
                "gradient unavailable, selections fall back to default"
            );
        }
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn cache(&self) -> &GradientCache {
        &self.cache
    }

    /// Change the device scale the gradient is rasterized at.
    ///
    /// The current selection is kept as is; it is not re-sampled.
    pub fn set_scale(&mut self, scale: f64) {
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.rebuild();
    }

    pub fn set_listener(&mut self, listener: &Rc<dyn SelectionListener>) {
        self.listener = Some(Rc::downgrade(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn current_selection(&self) -> PaletteColor {
        self.selection
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Replace the selection without notifying, e.g. when the host pushes
    /// a value it changed itself.
    pub fn restore(&mut self, selection: PaletteColor) {
        self.selection = selection;
    }

    /// Indicator position along a track of `track_height`.
    pub fn indicator_offset(&self, track_height: f64) -> f64 {
        self.selection.phase() * track_height.max(0.0)
    }

    fn resolve(&self, phase: f64) -> Result<PaletteColor> {
        let bitmap = self
            .cache
            .current()
            .ok_or(PaletteError::Unreadable)?;
        let color = GradientSampler::sample(bitmap, phase)?;
        Ok(PaletteColor::new(color, phase))
    }

    /// Select the color at `y` on a track `track_height` tall.
    ///
    /// `y` outside the track is clamped. The listener, if still alive, is
    /// notified before this returns.
    pub fn select(&mut self, y: f64, track_height: f64) -> PaletteColor {
        let phase = math::inverse_lerp_clamped(y, track_height);
        self.selection = match self.resolve(phase) {
            Ok(selection) => selection,
            Err(err) => {
                tracing::warn!(%err, phase, "sampling failed, using default color");
                PaletteColor::default()
            }
        };
        tracing::debug!(
            phase = self.selection.phase(),
            color = %self.selection.color().to_hex(),
            "palette selection"
        );
        self.notify();
        self.selection
    }

    fn notify(&self) {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.selection_changed();
        }
    }

    pub fn pointer_down(&mut self, y: f64, track_height: f64) -> PaletteColor {
        self.drag = DragState::Dragging;
        self.select(y, track_height)
    }

    /// Selects only while dragging.
    pub fn pointer_move(&mut self, y: f64, track_height: f64) -> Option<PaletteColor> {
        self.is_dragging().then(|| self.select(y, track_height))
    }

    pub fn pointer_up(&mut self, y: f64, track_height: f64) -> Option<PaletteColor> {
        let selected = self.pointer_move(y, track_height);
        self.drag = DragState::Idle;
        selected
    }

    pub fn pointer_cancel(&mut self, y: f64, track_height: f64) -> Option<PaletteColor> {
        self.pointer_up(y, track_height)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use floem::kurbo::Size;

    use super::*;
    use crate::color::SolidColor;

    fn counter() -> (Rc<Cell<usize>>, Rc<dyn SelectionListener>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let listener: Rc<dyn SelectionListener> = Rc::new(move || c.set(c.get() + 1));
        (count, listener)
    }

    fn default_controller() -> PaletteController {
        PaletteController::new(PaletteColor::default(), PaletteConfig::default())
    }

    #[test]
    fn keeps_initial_selection_until_select() {
        let initial = PaletteColor::new(SolidColor::BLACK, 1.0);
        let controller = PaletteController::new(initial, PaletteConfig::default());
        assert_eq!(controller.current_selection(), initial);
        assert!(!controller.is_dragging());
        assert_eq!(controller.config(), &PaletteConfig::default());
    }

    #[test]
    fn select_notifies_once_per_call() {
        let (count, listener) = counter();
        let mut controller = default_controller();
        controller.set_listener(&listener);
        controller.select(10.0, 200.0);
        controller.select(20.0, 200.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropped_listener_is_ignored() {
        let (count, listener) = counter();
        let mut controller = default_controller();
        controller.set_listener(&listener);
        drop(listener);
        controller.select(10.0, 200.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn restore_does_not_notify() {
        let (count, listener) = counter();
        let mut controller = default_controller();
        controller.set_listener(&listener);
        let pushed = PaletteColor::new(SolidColor::BLACK, 1.0);
        controller.restore(pushed);
        assert_eq!(controller.current_selection(), pushed);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut controller = default_controller();
        assert_eq!(controller.pointer_move(150.0, 200.0), None);
        assert_eq!(controller.current_selection(), PaletteColor::default());
    }

    #[test]
    fn drag_lifecycle() {
        let (count, listener) = counter();
        let mut controller = default_controller();
        controller.set_listener(&listener);

        controller.pointer_down(0.0, 200.0);
        assert_eq!(controller.drag_state(), DragState::Dragging);
        assert!(controller.pointer_move(50.0, 200.0).is_some());
        let last = controller.pointer_up(200.0, 200.0).unwrap();
        assert_eq!(controller.drag_state(), DragState::Idle);
        assert_eq!(last.phase(), 1.0);
        assert_eq!(count.get(), 3);

        assert_eq!(controller.pointer_up(100.0, 200.0), None);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn cancel_ends_drag_with_current_coordinate() {
        let mut controller = default_controller();
        controller.pointer_down(0.0, 200.0);
        let cancelled = controller.pointer_cancel(100.0, 200.0).unwrap();
        assert_eq!(cancelled.phase(), 0.5);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn rescale_preserves_selection() {
        let mut controller = default_controller();
        let before = controller.select(60.0, 200.0);
        controller.set_scale(2.0);
        assert_eq!(controller.current_selection(), before);
        assert_eq!(controller.cache().current().map(|b| b.height()), Some(400));
        assert_eq!(controller.indicator_offset(400.0), before.phase() * 400.0);
    }

    #[test]
    fn unavailable_gradient_falls_back_to_default() {
        let config = PaletteConfig::default().with_strip_size(Size::new(8.0, 0.0));
        let initial = PaletteColor::new(SolidColor::BLACK, 1.0);
        let mut controller = PaletteController::new(initial, config);
        assert_eq!(controller.current_selection(), initial);
        assert_eq!(controller.select(120.0, 200.0), PaletteColor::default());
        assert_eq!(controller.current_selection(), PaletteColor::default());
    }
}
