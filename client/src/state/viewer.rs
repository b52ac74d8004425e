//! Viewer page state: the carousel core plus project load status.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<ViewerState>` is provided per viewer page. Components call
//! carousel operations through `update`, then hand the returned
//! [`Action`]s to the auto-rotate timer slot; frame and zoom changes are
//! picked up by re-rendering from this state.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use carousel::controller::{Action, CarouselCore};
use carousel::images::ImageSet;

use crate::net::error::ApiError;
use crate::net::types::Project;

pub const NO_IMAGES_MESSAGE: &str = "No images in this project";

/// Where the frames came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerSource {
    #[default]
    Demo,
    Project { id: String, name: String },
}

#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    pub core: CarouselCore,
    pub source: ViewerSource,
    pub loading: bool,
    pub error: Option<String>,
    pub fullscreen: bool,
}

impl ViewerState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Show the bundled sample frames.
    pub fn load_demo(&mut self) -> Vec<Action> {
        self.loading = false;
        self.error = None;
        self.source = ViewerSource::Demo;
        let mut actions = self.core.stop_auto_rotate();
        actions.extend(self.core.load_set(ImageSet::demo()));
        actions
    }

    /// Apply the outcome of `GET /api/project/{id}`.
    ///
    /// A project without frames is reported as an error instead of falling
    /// back to the demo set, so an empty capture is visible as such.
    pub fn finish_load(&mut self, result: Result<Project, ApiError>) -> Vec<Action> {
        self.loading = false;
        let mut actions = self.core.stop_auto_rotate();
        let project = match result {
            Ok(project) => project,
            Err(err) => {
                self.error = Some(format!("Could not load project: {err}"));
                return actions;
            }
        };
        let filenames = project.images.clone().unwrap_or_default();
        self.source = ViewerSource::Project {
            id: project.id.clone(),
            name: project.display_name().to_owned(),
        };
        if filenames.is_empty() {
            self.error = Some(NO_IMAGES_MESSAGE.to_owned());
            return actions;
        }
        self.error = None;
        actions.extend(self.core.load_set(ImageSet::from_project(&project.id, &filenames)));
        actions
    }

    #[must_use]
    pub fn title(&self) -> String {
        match &self.source {
            ViewerSource::Demo => "Demo".to_owned(),
            ViewerSource::Project { name, .. } => name.clone(),
        }
    }

    /// `"12 / 36"` position label.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.core.is_empty() {
            return "0 / 0".to_owned();
        }
        format!("{} / {}", self.core.current_index() + 1, self.core.len())
    }

    /// Slider value in `[0, 1]` for the current frame.
    #[must_use]
    pub fn slider_fraction(&self) -> f64 {
        let last = self.core.len().saturating_sub(1);
        if last == 0 {
            return 0.0;
        }
        let (Ok(index), Ok(last)) = (u32::try_from(self.core.current_index()), u32::try_from(last)) else {
            return 0.0;
        };
        f64::from(index) / f64::from(last)
    }

    /// Frame URLs for the thumbnail strip. Changes only when a new set is
    /// loaded, never on navigation, drag, zoom or auto-rotate ticks.
    #[must_use]
    pub fn frame_urls(&self) -> Vec<String> {
        self.core.images().as_slice().to_vec()
    }

    #[must_use]
    pub fn has_frames(&self) -> bool {
        self.error.is_none() && !self.core.is_empty()
    }
}

/// Keep only the timer actions; frame and zoom changes render from state.
#[must_use]
pub fn timer_actions(actions: Vec<Action>) -> Vec<Action> {
    actions
        .into_iter()
        .filter(|a| matches!(a, Action::StartTimer { .. } | Action::StopTimer))
        .collect()
}
