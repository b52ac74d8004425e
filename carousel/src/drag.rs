//! Pointer-drag tracking for frame scrubbing.
//!
//! A drag keeps a horizontal reference position. Each move that travels more
//! than the threshold from that reference yields exactly one [`Step`] and
//! moves the reference to the current pointer position, so a long drag
//! flips frames at a steady rate regardless of event frequency.
//!
//! Direction convention: dragging **left** (negative Δx) is [`Step::Forward`]
//! and advances the frame index; dragging **right** is [`Step::Backward`].

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::DRAG_THRESHOLD_PX;

/// One frame of rotation produced by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Advance to the next frame.
    Forward,
    /// Return to the previous frame.
    Backward,
}

impl Step {
    /// Signed index offset for this step.
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No pointer is held.
    #[default]
    Idle,
    /// A pointer is held; `reference_x` is the position of the last step.
    Dragging { reference_x: f64 },
}

/// Turns raw pointer x positions into discrete frame steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    threshold_px: f64,
    state: DragState,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl DragTracker {
    /// Negative or NaN thresholds are treated as zero.
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px: threshold_px.max(0.0), state: DragState::Idle }
    }

    #[must_use]
    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed at `x`.
    pub fn begin(&mut self, x: f64) {
        self.state = DragState::Dragging { reference_x: x };
    }

    /// Pointer moved to `x`. Returns a step when travel exceeds the threshold.
    pub fn update(&mut self, x: f64) -> Option<Step> {
        let DragState::Dragging { reference_x } = self.state else {
            return None;
        };
        let delta = x - reference_x;
        if delta.abs() <= self.threshold_px {
            return None;
        }
        self.state = DragState::Dragging { reference_x: x };
        Some(if delta < 0.0 { Step::Forward } else { Step::Backward })
    }

    /// Pointer released or cancelled.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}
