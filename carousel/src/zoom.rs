//! Clamped zoom level applied as a CSS scale transform.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Bounds and increment for zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: MIN_ZOOM, max: MAX_ZOOM, step: ZOOM_STEP }
    }
}

/// Current scale factor, always within `[limits.min, limits.max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: f64,
    limits: ZoomLimits,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl Zoom {
    /// Starts at the default level, clamped into the given limits.
    /// Inverted limits are swapped.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = if limits.min > limits.max {
            ZoomLimits { min: limits.max, max: limits.min, step: limits.step }
        } else {
            limits
        };
        Self { level: DEFAULT_ZOOM.clamp(limits.min, limits.max), limits }
    }

    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Increase by one step. Returns whether the level changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.level + self.limits.step)
    }

    /// Decrease by one step. Returns whether the level changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set(self.level - self.limits.step)
    }

    /// Back to the default level. Returns whether the level changed.
    pub fn reset(&mut self) -> bool {
        self.set(DEFAULT_ZOOM)
    }

    #[must_use]
    pub fn at_max(&self) -> bool {
        self.level >= self.limits.max
    }

    #[must_use]
    pub fn at_min(&self) -> bool {
        self.level <= self.limits.min
    }

    /// CSS `transform` value for the current level.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("scale({:.2})", self.level)
    }

    fn set(&mut self, level: f64) -> bool {
        // Round away float drift from repeated 0.1 steps.
        let level = ((level * 1000.0).round() / 1000.0).clamp(self.limits.min, self.limits.max);
        if (level - self.level).abs() < f64::EPSILON {
            return false;
        }
        self.level = level;
        true
    }
}
