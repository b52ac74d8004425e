#![allow(clippy::float_cmp)]

use super::*;

// --- Step ---

#[test]
fn step_offsets() {
    assert_eq!(Step::Forward.offset(), 1);
    assert_eq!(Step::Backward.offset(), -1);
}

// --- Construction ---

#[test]
fn default_uses_crate_threshold() {
    let tracker = DragTracker::default();
    assert_eq!(tracker.threshold_px(), DRAG_THRESHOLD_PX);
    assert_eq!(tracker.state(), DragState::Idle);
}

#[test]
fn negative_threshold_clamps_to_zero() {
    assert_eq!(DragTracker::new(-4.0).threshold_px(), 0.0);
}

// --- Gesture lifecycle ---

#[test]
fn update_without_begin_is_ignored() {
    let mut tracker = DragTracker::new(5.0);
    assert_eq!(tracker.update(100.0), None);
    assert!(!tracker.is_dragging());
}

#[test]
fn begin_sets_reference() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(40.0);
    assert_eq!(tracker.state(), DragState::Dragging { reference_x: 40.0 });
}

#[test]
fn small_moves_do_not_step() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(100.0);
    assert_eq!(tracker.update(104.0), None);
    assert_eq!(tracker.update(95.0), None);
    assert_eq!(tracker.state(), DragState::Dragging { reference_x: 100.0 });
}

#[test]
fn exactly_threshold_does_not_step() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(100.0);
    assert_eq!(tracker.update(105.0), None);
}

#[test]
fn drag_left_steps_forward() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(100.0);
    assert_eq!(tracker.update(90.0), Some(Step::Forward));
}

#[test]
fn drag_right_steps_backward() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(100.0);
    assert_eq!(tracker.update(110.0), Some(Step::Backward));
}

#[test]
fn step_resets_reference_to_pointer() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(100.0);
    tracker.update(80.0);
    assert_eq!(tracker.state(), DragState::Dragging { reference_x: 80.0 });
    // Within threshold of the new reference: no step.
    assert_eq!(tracker.update(77.0), None);
    assert_eq!(tracker.update(70.0), Some(Step::Forward));
}

#[test]
fn large_jump_yields_single_step() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(500.0);
    assert_eq!(tracker.update(0.0), Some(Step::Forward));
    assert_eq!(tracker.update(0.0), None);
}

#[test]
fn end_returns_to_idle() {
    let mut tracker = DragTracker::new(5.0);
    tracker.begin(10.0);
    tracker.end();
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.update(-50.0), None);
}
