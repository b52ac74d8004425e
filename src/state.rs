//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after startup: the parsed config plus one pooled
//! `reqwest::Client` reused by every forwarded request.

use std::sync::Arc;

use crate::config::HostConfig;
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// [`HostError::HttpClient`] when the TLS backend cannot be initialised.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()
            .map_err(|e| HostError::HttpClient(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }

    /// Backend base URL, no trailing `/`.
    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }
}
