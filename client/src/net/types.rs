//! Wire types for the turntable backend's JSON endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend payloads exactly (`type`, `baudrate`,
//! `default_degrees`) so a config fetched from `/get_config` can be posted
//! back to `/save_config` unchanged. Every config section carries serde
//! defaults, so a partial or older config file still deserializes into a
//! complete value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Projects
// =============================================================

/// One capture project as listed by `/api/projects` or fetched by
/// `/api/project/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_created")]
    pub created: Option<i64>,
    /// Ordered frame filenames. The list endpoint may omit these.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub image_count: Option<usize>,
}

impl Project {
    /// Name shown in lists and headers; falls back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }

    /// Number of frames, preferring the explicit list over the count field.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.images
            .as_ref()
            .map_or(self.image_count.unwrap_or(0), Vec::len)
    }

    /// URL of the first frame, used as the list thumbnail.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        let first = self.images.as_ref()?.first()?;
        Some(carousel::images::project_image_url(&self.id, first))
    }
}

/// Accepts unix seconds as an integer or float, or an ISO 8601 date string.
/// Anything else reads as an unknown creation time rather than failing the
/// whole project (and with it the whole list).
fn deserialize_created<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(created_seconds))
}

fn created_seconds(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Some(v);
            }
            let v = n.as_f64().filter(|v| v.is_finite())?.floor();
            #[allow(clippy::cast_possible_truncation)]
            let seconds = v as i64;
            Some(seconds)
        }
        serde_json::Value::String(s) => crate::util::format::parse_iso_seconds(s),
        _ => None,
    }
}

// =============================================================
// Config
// =============================================================

/// Camera backend kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    #[default]
    Webcam,
    Gphoto2,
}

impl CameraKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Webcam => "webcam",
            Self::Gphoto2 => "gphoto2",
        }
    }

    /// Parse a `<select>` value; unknown values map to `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "webcam" => Some(Self::Webcam),
            "gphoto2" => Some(Self::Gphoto2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub device_path: String,
    #[serde(rename = "type")]
    pub kind: CameraKind,
    pub resolution: Resolution,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_path: "/dev/video0".to_owned(),
            kind: CameraKind::Webcam,
            resolution: Resolution::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArduinoConfig {
    pub port: String,
    pub baudrate: u32,
}

impl Default for ArduinoConfig {
    fn default() -> Self {
        Self { port: "/dev/ttyACM0".to_owned(), baudrate: 9600 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Degrees per capture step.
    pub default_degrees: u32,
    /// Seconds to wait between steps.
    pub default_interval: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { default_degrees: 15, default_interval: 5 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub enabled: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Full device configuration. Saved by replacing the whole object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub arduino: ArduinoConfig,
    pub rotation: RotationConfig,
    pub simulator: SimulatorConfig,
}

// =============================================================
// Devices
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedCameras {
    pub webcams: Vec<String>,
    pub gphoto2: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialPort {
    pub port: String,
    #[serde(default)]
    pub description: String,
}

/// Hardware detected by the backend, offered as form suggestions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Devices {
    pub cameras: DetectedCameras,
    pub arduinos: Vec<SerialPort>,
}

// =============================================================
// Responses
// =============================================================

/// Generic `{status, message, error, url}` envelope used by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub url: Option<String>,
}

impl StatusResponse {
    /// Whether the body reports failure despite a 2xx status.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.status.as_deref() == Some("error")
    }

    /// Most specific human-readable message: `error`, then `message`.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Request body for `POST /generate_360`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
}
