//! Failure taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend call. Every variant carries enough text to render inline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status, or a 2xx body that reports an error.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Message for a failed response: the body's `error` field, else its
/// `message` field, else a generic line with the status code.
#[must_use]
pub fn status_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<super::types::StatusResponse>(body);
    if let Ok(resp) = parsed {
        if let Some(message) = resp.server_message() {
            return message.to_owned();
        }
    }
    let text = body.trim();
    if !text.is_empty() && !text.starts_with('{') && !text.starts_with('<') && text.len() <= 200 {
        return text.to_owned();
    }
    format!("request failed with status {status}")
}
