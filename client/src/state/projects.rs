//! Project-list state for the projects page.
//!
//! DESIGN
//! ======
//! The list is kept sorted newest-first at the point it is loaded, so
//! rendering never re-sorts. Create and delete dialogs keep their own pending
//! and error fields so a failed create does not hide the list's load error.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::error::ApiError;
use crate::net::types::Project;

/// Project awaiting delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
    pub delete_target: Option<DeleteTarget>,
    pub delete_pending: bool,
    pub create_open: bool,
    pub create_pending: bool,
    pub create_error: Option<String>,
}

impl ProjectsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of `GET /api/projects`.
    pub fn finish_load(&mut self, result: Result<Vec<Project>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(load_error_message(&err));
            }
        }
    }

    pub fn request_delete(&mut self, project: &Project) {
        self.delete_target = Some(DeleteTarget {
            id: project.id.clone(),
            name: project.display_name().to_owned(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.delete_pending = false;
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
        self.create_pending = false;
        self.create_error = None;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
        self.create_pending = false;
    }

    pub fn create_failed(&mut self, err: &ApiError) {
        self.create_pending = false;
        self.create_error = Some(err.to_string());
    }
}

/// Newest first by `created`; projects without a timestamp sort last, ties
/// keep backend order.
pub fn sort_newest_first(items: &mut [Project]) {
    items.sort_by(|a, b| b.created.unwrap_or(i64::MIN).cmp(&a.created.unwrap_or(i64::MIN)));
}

#[must_use]
pub fn load_error_message(err: &ApiError) -> String {
    format!("Could not load projects: {err}")
}

/// Viewer route for a project.
#[must_use]
pub fn viewer_href(project_id: &str) -> String {
    format!("/viewer?project={}", urlencoding::encode(project_id))
}

/// Reject a blank project name before anything is sent.
///
/// # Errors
///
/// Returns a user-facing message when the trimmed name is empty.
pub fn validate_project_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Please enter a project name".to_owned());
    }
    Ok(trimmed.to_owned())
}
