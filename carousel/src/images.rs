//! Ordered frame URLs for one 360° capture.
//!
//! Frames are addressed by a signed position that wraps modulo the set
//! length, so callers can step past either end without bounds checks.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::consts::{DEMO_FRAME_COUNT, DEMO_SAMPLE_VARIANTS};

/// URL of one project frame as served by the backend's static route.
#[must_use]
pub fn project_image_url(project_id: &str, filename: &str) -> String {
    format!("/static/projects/{project_id}/{filename}")
}

/// URL of one bundled sample image.
#[must_use]
pub fn demo_image_url(n: usize) -> String {
    format!("/static/sample_images/sample_image_{n}.jpg")
}

/// An immutable, ordered list of frame URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    urls: Vec<String>,
}

impl ImageSet {
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    /// Build the frame list for a project from its ordered filenames.
    #[must_use]
    pub fn from_project(project_id: &str, filenames: &[String]) -> Self {
        Self::new(
            filenames
                .iter()
                .map(|name| project_image_url(project_id, name))
                .collect(),
        )
    }

    /// The demo set: 36 frames cycling through the ten sample images.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(
            (0..DEMO_FRAME_COUNT)
                .map(|i| demo_image_url(i % DEMO_SAMPLE_VARIANTS))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Map any signed position into `[0, len)`. `None` when the set is empty.
    #[must_use]
    pub fn wrap(&self, position: i64) -> Option<usize> {
        let Ok(len) = i64::try_from(self.urls.len()) else {
            return None;
        };
        if len == 0 {
            return None;
        }
        let Ok(index) = usize::try_from(position.rem_euclid(len)) else {
            return None;
        };
        Some(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }
}
