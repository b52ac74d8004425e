//! Guided 360° capture sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The capture page drives the turntable one step at a time: rotate by
//! `step_degrees`, take a photo, wait `interval` seconds, repeat until a full
//! turn is covered. [`CaptureSession`] is the state machine behind that loop;
//! the page's async task only asks it for the next step and reports results.
//!
//! ```text
//! Idle ──start──▶ Running ──last photo──▶ Complete
//!                   │  └──stop, then next step──▶ Aborted
//!                   └──failed call──▶ Errored
//! ```
//!
//! Terminal states behave like `Idle` for the next `start`.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

/// Degrees in one full turn.
pub const FULL_TURN_DEGREES: u32 = 360;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("rotation step must be between 1 and 360 degrees, got {0}")]
    InvalidStep(u32),
    #[error("a capture sequence is already running")]
    AlreadyRunning,
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
}

/// Step size, wait and step count for one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapturePlan {
    pub step_degrees: u32,
    pub interval_secs: u32,
    pub total_steps: u32,
}

impl CapturePlan {
    /// # Errors
    ///
    /// [`CaptureError::InvalidStep`] when the step is 0 or more than a full turn.
    pub fn new(step_degrees: u32, interval_secs: u32) -> Result<Self, CaptureError> {
        if step_degrees == 0 || step_degrees > FULL_TURN_DEGREES {
            return Err(CaptureError::InvalidStep(step_degrees));
        }
        Ok(Self { step_degrees, interval_secs, total_steps: FULL_TURN_DEGREES / step_degrees })
    }

    /// Build a plan from the page's text inputs.
    ///
    /// # Errors
    ///
    /// [`CaptureError::NotANumber`] for unparseable input, otherwise as [`Self::new`].
    pub fn parse(step: &str, interval: &str) -> Result<Self, CaptureError> {
        let step = parse_field("Rotation step", step)?;
        let interval = parse_field("Interval", interval)?;
        Self::new(step, interval)
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, CaptureError> {
    value.trim().parse::<u32>().map_err(|_| CaptureError::NotANumber { field })
}

/// Degrees for a single manual rotation.
///
/// # Errors
///
/// Rejects non-numbers and values outside 1..=360.
pub fn parse_manual_degrees(value: &str) -> Result<u32, CaptureError> {
    let degrees = parse_field("Degrees", value)?;
    if degrees == 0 || degrees > FULL_TURN_DEGREES {
        return Err(CaptureError::InvalidStep(degrees));
    }
    Ok(degrees)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CapturePhase {
    #[default]
    Idle,
    Running,
    Complete,
    Aborted,
    Errored(String),
}

#[derive(Clone, Debug, Default)]
pub struct CaptureSession {
    phase: CapturePhase,
    plan: Option<CapturePlan>,
    completed: u32,
    abort_requested: bool,
    latest_photo: Option<String>,
}

impl CaptureSession {
    /// Enter `Running` with a fresh plan.
    ///
    /// # Errors
    ///
    /// [`CaptureError::AlreadyRunning`] while a sequence is in flight.
    pub fn start(&mut self, plan: CapturePlan) -> Result<(), CaptureError> {
        if self.is_running() {
            return Err(CaptureError::AlreadyRunning);
        }
        self.phase = CapturePhase::Running;
        self.plan = Some(plan);
        self.completed = 0;
        self.abort_requested = false;
        Ok(())
    }

    /// Ask the loop to stop before its next step. Only meaningful while
    /// running; returns whether the request was taken.
    pub fn request_stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.abort_requested = true;
        true
    }

    /// Degrees for the next step, or `None` once the sequence has ended.
    ///
    /// Checked before every step: a pending stop moves to `Aborted`, a
    /// finished plan moves to `Complete`.
    pub fn next_step(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let plan = self.plan?;
        if self.abort_requested {
            self.phase = CapturePhase::Aborted;
            return None;
        }
        if self.completed >= plan.total_steps {
            self.phase = CapturePhase::Complete;
            return None;
        }
        Some(plan.step_degrees)
    }

    /// A step succeeded and produced `photo`.
    pub fn record_photo(&mut self, photo: String) {
        if !self.is_running() {
            return;
        }
        self.completed += 1;
        self.latest_photo = Some(photo);
    }

    /// A step failed; remaining steps are abandoned.
    pub fn record_error(&mut self, message: String) {
        if self.is_running() {
            self.phase = CapturePhase::Errored(message);
        }
    }

    /// Photo from a manual rotation, shown in the same preview slot.
    pub fn set_latest_photo(&mut self, photo: String) {
        self.latest_photo = Some(photo);
    }

    /// Back to `Idle` from a terminal state.
    pub fn reset(&mut self) {
        if !self.is_running() {
            self.phase = CapturePhase::Idle;
            self.completed = 0;
            self.abort_requested = false;
        }
    }

    #[must_use]
    pub fn phase(&self) -> &CapturePhase {
        &self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == CapturePhase::Running
    }

    /// Complete, aborted or errored: the status can be cleared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CapturePhase::Complete | CapturePhase::Aborted | CapturePhase::Errored(_))
    }

    #[must_use]
    pub fn is_stopping(&self) -> bool {
        self.is_running() && self.abort_requested
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.plan.map_or(0, |p| p.total_steps)
    }

    /// Whether a wait should follow the step just taken. No wait after the
    /// last photo.
    #[must_use]
    pub fn should_wait(&self) -> bool {
        self.is_running() && !self.abort_requested && self.completed < self.total()
    }

    #[must_use]
    pub fn interval_secs(&self) -> u32 {
        self.plan.map_or(0, |p| p.interval_secs)
    }

    #[must_use]
    pub fn latest_photo(&self) -> Option<&str> {
        self.latest_photo.as_deref()
    }

    /// Status line under the progress bar.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.phase {
            CapturePhase::Idle => String::new(),
            CapturePhase::Running if self.abort_requested => "Stopping rotation...".to_owned(),
            CapturePhase::Running if self.completed == 0 => "Rotation started...".to_owned(),
            CapturePhase::Running => crate::util::format::progress_label(self.completed, self.total()),
            CapturePhase::Complete => "Rotation complete!".to_owned(),
            CapturePhase::Aborted => "Rotation aborted".to_owned(),
            CapturePhase::Errored(message) => format!("Error: {message}"),
        }
    }

    /// CSS modifier for the progress bar.
    #[must_use]
    pub fn bar_class(&self) -> &'static str {
        match self.phase {
            CapturePhase::Idle | CapturePhase::Complete => "progress__bar",
            CapturePhase::Running => "progress__bar progress__bar--animated",
            CapturePhase::Aborted => "progress__bar progress__bar--warning",
            CapturePhase::Errored(_) => "progress__bar progress__bar--danger",
        }
    }
}
