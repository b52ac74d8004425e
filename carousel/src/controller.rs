use crate::consts::AUTO_ROTATE_PERIOD_MS;
use crate::drag::{DragTracker, Step};
use crate::images::ImageSet;
use crate::zoom::{Zoom, ZoomLimits};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Side effects returned from carousel operations for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show the frame at this index.
    ShowFrame { index: usize },
    /// Start the repeating auto-rotate timer; call [`CarouselCore::tick`] per period.
    StartTimer { period_ms: u32 },
    /// Cancel the auto-rotate timer.
    StopTimer,
    /// Re-apply the zoom transform at this level.
    ZoomChanged(f64),
}

/// Tunables for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Horizontal travel in CSS pixels that flips one frame.
    pub drag_threshold_px: f64,
    /// Auto-rotate tick period.
    pub auto_rotate_period_ms: u32,
    pub zoom: ZoomLimits,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: crate::consts::DRAG_THRESHOLD_PX,
            auto_rotate_period_ms: AUTO_ROTATE_PERIOD_MS,
            zoom: ZoomLimits::default(),
        }
    }
}

/// Carousel state and transitions, free of DOM and timer handles.
///
/// Invariant: when the image set is non-empty, `index < images.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselCore {
    images: ImageSet,
    index: usize,
    drag: DragTracker,
    zoom: Zoom,
    auto_rotating: bool,
    period_ms: u32,
}

impl Default for CarouselCore {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

impl CarouselCore {
    #[must_use]
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            images: ImageSet::default(),
            index: 0,
            drag: DragTracker::new(options.drag_threshold_px),
            zoom: Zoom::new(options.zoom),
            auto_rotating: false,
            period_ms: options.auto_rotate_period_ms.max(1),
        }
    }

    // --- Data inputs ---

    /// Replace the frame list and rewind to the first frame.
    ///
    /// An empty list falls back to the demo set so the viewer always has
    /// something to show.
    pub fn load_images(&mut self, urls: Vec<String>) -> Vec<Action> {
        self.load_set(ImageSet::new(urls))
    }

    /// [`Self::load_images`] for an already built set.
    pub fn load_set(&mut self, images: ImageSet) -> Vec<Action> {
        self.images = if images.is_empty() { ImageSet::demo() } else { images };
        self.index = 0;
        vec![Action::ShowFrame { index: 0 }]
    }

    // --- Navigation ---

    /// Show the frame at `position`, wrapped into range. No-op when empty.
    pub fn show(&mut self, position: i64) -> Vec<Action> {
        let Some(index) = self.images.wrap(position) else {
            return Vec::new();
        };
        self.index = index;
        vec![Action::ShowFrame { index }]
    }

    /// Next frame, wrapping to the first.
    pub fn advance(&mut self) -> Vec<Action> {
        self.step(Step::Forward)
    }

    /// Previous frame, wrapping to the last.
    pub fn retreat(&mut self) -> Vec<Action> {
        self.step(Step::Backward)
    }

    /// Jump to a fractional position along the set, as driven by a slider.
    pub fn seek_fraction(&mut self, fraction: f64) -> Vec<Action> {
        let last = self.images.len().saturating_sub(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let position = (fraction.clamp(0.0, 1.0) * last as f64).floor() as i64;
        self.show(position)
    }

    fn step(&mut self, step: Step) -> Vec<Action> {
        let Ok(current) = i64::try_from(self.index) else {
            return Vec::new();
        };
        self.show(current + step.offset())
    }

    // --- Pointer drag ---

    /// Pointer pressed. Stops auto-rotation before the drag is tracked.
    pub fn on_drag_start(&mut self, x: f64) -> Vec<Action> {
        let actions = self.stop_auto_rotate();
        self.drag.begin(x);
        actions
    }

    /// Pointer moved while pressed.
    pub fn on_drag_move(&mut self, x: f64) -> Vec<Action> {
        match self.drag.update(x) {
            Some(step) => self.step(step),
            None => Vec::new(),
        }
    }

    /// Pointer released or cancelled.
    pub fn on_drag_end(&mut self) {
        self.drag.end();
    }

    // --- Auto-rotate ---

    /// Begin auto-rotation. Starting while already running is a no-op, as is
    /// starting with no frames.
    pub fn start_auto_rotate(&mut self) -> Vec<Action> {
        if self.auto_rotating || self.images.is_empty() {
            return Vec::new();
        }
        self.auto_rotating = true;
        vec![Action::StartTimer { period_ms: self.period_ms }]
    }

    /// End auto-rotation. No-op when not running.
    pub fn stop_auto_rotate(&mut self) -> Vec<Action> {
        if !self.auto_rotating {
            return Vec::new();
        }
        self.auto_rotating = false;
        vec![Action::StopTimer]
    }

    pub fn toggle_auto_rotate(&mut self) -> Vec<Action> {
        if self.auto_rotating {
            self.stop_auto_rotate()
        } else {
            self.start_auto_rotate()
        }
    }

    /// One timer period elapsed. Ignored unless auto-rotating, so a stale
    /// tick after a stop never moves the frame.
    pub fn tick(&mut self) -> Vec<Action> {
        if !self.auto_rotating {
            return Vec::new();
        }
        self.advance()
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        if self.zoom.zoom_in() { vec![Action::ZoomChanged(self.zoom.level())] } else { Vec::new() }
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        if self.zoom.zoom_out() { vec![Action::ZoomChanged(self.zoom.level())] } else { Vec::new() }
    }

    /// Mouse wheel: scrolling up zooms in, anything else zooms out.
    pub fn on_wheel(&mut self, delta_y: f64) -> Vec<Action> {
        if delta_y < 0.0 { self.zoom_in() } else { self.zoom_out() }
    }

    /// First frame, default zoom, auto-rotation stopped.
    pub fn reset(&mut self) -> Vec<Action> {
        let mut actions = self.stop_auto_rotate();
        actions.extend(self.show(0));
        if self.zoom.reset() {
            actions.push(Action::ZoomChanged(self.zoom.level()));
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// URL of the frame currently shown.
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        self.images.get(self.index)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotating
    }

    #[must_use]
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    #[must_use]
    pub fn auto_rotate_period_ms(&self) -> u32 {
        self.period_ms
    }
}
