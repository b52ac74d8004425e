//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BACKEND_URL`: capture backend base URL, default `http://127.0.0.1:5000`
//! - `BACKEND_TIMEOUT_SECS`: per-request upstream timeout, default 30
//!
//! Present-but-invalid values are errors; the host refuses to start rather
//! than silently falling back.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key} {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL without a trailing `/`.
    pub backend_url: String,
    pub backend_timeout: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        }
    }
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => parse_port(&raw)?,
        };
        let backend_url = match lookup("BACKEND_URL") {
            None => DEFAULT_BACKEND_URL.to_owned(),
            Some(raw) => parse_backend_url(&raw)?,
        };
        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            Some(raw) => parse_timeout(&raw)?,
        };
        Ok(Self { port, backend_url, backend_timeout })
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { key, value: value.to_owned(), reason }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(invalid("PORT", raw, "port must be non-zero")),
        Ok(port) => Ok(port),
        Err(_) => Err(invalid("PORT", raw, "expected an integer between 1 and 65535")),
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let Some(host) = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://")) else {
        return Err(invalid("BACKEND_URL", raw, "expected an http:// or https:// URL"));
    };
    if host.is_empty() {
        return Err(invalid("BACKEND_URL", raw, "missing host"));
    }
    Ok(url.to_owned())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("BACKEND_TIMEOUT_SECS", raw, "timeout must be at least 1 second")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(invalid("BACKEND_TIMEOUT_SECS", raw, "expected a whole number of seconds")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
