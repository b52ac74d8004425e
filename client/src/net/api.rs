//! REST helpers for the turntable backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are turned
//! into [`ApiError::Status`] carrying the server's `error`/`message` text, so
//! pages can show exactly what the backend said. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Config, Devices, Project};

#[cfg(any(test, feature = "hydrate"))]
use super::types::{CreateProjectRequest, StatusResponse};

pub const PROJECTS_ENDPOINT: &str = "/api/projects";
pub const CONFIG_ENDPOINT: &str = "/get_config";
pub const SAVE_CONFIG_ENDPOINT: &str = "/save_config";
pub const ROTATE_ENDPOINT: &str = "/rotate";
pub const DEVICES_ENDPOINT: &str = "/api/devices";
pub const GENERATE_ENDPOINT: &str = "/generate_360";

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(project_id: &str) -> String {
    format!("/api/project/{}", urlencoding::encode(project_id))
}

/// `application/x-www-form-urlencoded` body for `/rotate`.
#[cfg(any(test, feature = "hydrate"))]
fn rotate_form_body(degrees: u32, interval: Option<u32>) -> String {
    match interval {
        Some(interval) => format!("degrees={degrees}&interval={interval}"),
        None => format!("degrees={degrees}"),
    }
}

/// The `/rotate` endpoint answers with the captured photo's path as text.
#[cfg(any(test, feature = "hydrate"))]
fn parse_photo_path(body: &str) -> Result<String, ApiError> {
    let path = body.trim().trim_matches('"');
    if path.is_empty() {
        return Err(ApiError::Decode("empty photo path".to_owned()));
    }
    Ok(path.to_owned())
}

/// Success check for `/save_config`: 2xx alone is not enough, the body must
/// report `status: "success"`.
#[cfg(any(test, feature = "hydrate"))]
fn check_save_response(status: u16, body: &StatusResponse) -> Result<String, ApiError> {
    if body.status.as_deref() == Some("success") {
        return Ok(body.message.clone().unwrap_or_else(|| "Settings saved".to_owned()));
    }
    Err(ApiError::Status {
        status,
        message: body.server_message().unwrap_or("unknown error").to_owned(),
    })
}

/// Viewer URL out of a `/generate_360` response.
#[cfg(any(test, feature = "hydrate"))]
fn check_create_response(status: u16, body: &StatusResponse) -> Result<String, ApiError> {
    if body.is_error() {
        return Err(ApiError::Status {
            status,
            message: body.server_message().unwrap_or("unknown error").to_owned(),
        });
    }
    body.url
        .clone()
        .ok_or_else(|| ApiError::Decode("missing url in response".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_request(name: &str, description: &str) -> CreateProjectRequest {
    CreateProjectRequest { name: name.trim().to_owned(), description: description.trim().to_owned() }
}

/// Text shown in the alert when deleting a project fails.
#[must_use]
pub fn delete_failure_message(err: &ApiError) -> String {
    format!("Error deleting project: {err}")
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Status`]; pass 2xx through.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message: super::error::status_message(status, &body) })
}

/// Fetch every project from `GET /api/projects`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a project list.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROJECTS_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<Project>>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one project with its ordered frame list from `GET /api/project/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the project does not exist,
/// or the body cannot be decoded.
pub async fn fetch_project(project_id: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&project_endpoint(project_id))
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Project>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err(ApiError::Unavailable)
    }
}

/// Delete a project via `DELETE /api/project/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError::Status`] with the server's message when the backend
/// refuses, or [`ApiError::Network`] if the request never completes.
pub async fn delete_project(project_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&project_endpoint(project_id))
            .send()
            .await
            .map_err(network)?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the device configuration from `GET /get_config`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a config.
pub async fn fetch_config() -> Result<Config, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Config>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stored configuration verbatim, including keys this client does
/// not model, for the "show current config" panel.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn fetch_config_raw() -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<serde_json::Value>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Replace the stored configuration via `POST /save_config`.
///
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend does not
/// report `status: "success"`.
pub async fn save_config(config: &Config) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SAVE_CONFIG_ENDPOINT)
            .json(config)
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        let text = resp.text().await.map_err(decode)?;
        let body = serde_json::from_str::<StatusResponse>(&text).unwrap_or_else(|_| StatusResponse {
            message: Some(super::error::status_message(status, &text)),
            ..StatusResponse::default()
        });
        check_save_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// List cameras and serial ports detected by the backend (`GET /api/devices`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn fetch_devices() -> Result<Devices, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DEVICES_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Devices>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Rotate the turntable and take a photo via `POST /rotate`.
///
/// Returns the path of the captured photo.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the rotation or capture
/// fails on the backend, or no photo path comes back.
pub async fn rotate(degrees: u32, interval: Option<u32>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ROTATE_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(rotate_form_body(degrees, interval))
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        let text = resp.text().await.map_err(decode)?;
        parse_photo_path(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (degrees, interval);
        Err(ApiError::Unavailable)
    }
}

/// Start a new capture project via `POST /generate_360`.
///
/// Returns the viewer URL for the new project.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend reports an
/// error.
pub async fn create_project(name: &str, description: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&create_request(name, description))
            .map_err(decode)?
            .send()
            .await
            .map_err(network)?;
        let resp = ensure_ok(resp).await?;
        let status = resp.status();
        let body = resp.json::<StatusResponse>().await.map_err(decode)?;
        check_create_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description);
        Err(ApiError::Unavailable)
    }
}
