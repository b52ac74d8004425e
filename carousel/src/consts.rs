//! Shared numeric constants for the carousel crate.

// ── Drag ────────────────────────────────────────────────────────

/// Horizontal pointer travel, in CSS pixels, that flips one frame.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

// ── Auto-rotate ─────────────────────────────────────────────────

/// Interval between auto-rotate ticks in milliseconds.
pub const AUTO_ROTATE_PERIOD_MS: u32 = 100;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed scale factor.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest allowed scale factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Scale change per zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

/// Scale factor restored by reset.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ── Demo set ────────────────────────────────────────────────────

/// Frames in the demo fallback set (10° per frame).
pub const DEMO_FRAME_COUNT: usize = 36;

/// Distinct sample images the demo frames cycle through.
pub const DEMO_SAMPLE_VARIANTS: usize = 10;
