//! Host error type and its HTTP mapping.
//!
//! ERROR HANDLING
//! ==============
//! Forwarding failures become JSON `{"error": "..."}` bodies so the client's
//! status-message extraction treats them like backend errors. Startup
//! variants never reach a response; `main` logs them and exits.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out: {0}")]
    Timeout(String),

    #[error("request body unreadable: {0}")]
    Body(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client build failed: {0}")]
    HttpClient(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl HostError {
    /// Classify a forwarding failure.
    pub fn upstream(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout(err.to_string()) } else { Self::Unreachable(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::HttpClient(_) | Self::Leptos(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
