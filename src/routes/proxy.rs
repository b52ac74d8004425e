//! Pass-through forwarding to the capture backend.
//!
//! DESIGN
//! ======
//! The host owns no backend semantics. Method, path, query, content type
//! and body go upstream as received; status, content type and body come
//! back verbatim, including upstream 4xx/5xx. Only transport failures are
//! mapped, to 502 or 504 via [`HostError`].

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::Uri;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::error::HostError;
use crate::state::AppState;

/// Upper bound on a buffered request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Upstream URL for an incoming request URI.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, HostError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(state.backend_url(), &parts.uri);
    let body: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| HostError::Body(e.to_string()))?;

    let mut upstream = state.http.request(parts.method.clone(), &url).body(body);
    if let Some(content_type) = parts.headers.get(CONTENT_TYPE) {
        upstream = upstream.header(CONTENT_TYPE, content_type.clone());
    }

    let response = upstream.send().await.map_err(|e| {
        tracing::warn!(method = %parts.method, %url, error = %e, "forward failed");
        HostError::upstream(&e)
    })?;

    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let bytes = response.bytes().await.map_err(|e| HostError::upstream(&e))?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "forwarded");

    let mut out = (status, Body::from(bytes)).into_response();
    if let Some(content_type) = content_type {
        out.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
