//! Settings form state and validation.
//!
//! DESIGN
//! ======
//! Inputs are held as the raw strings the user typed. Conversion to a
//! [`Config`] happens once, on submit, through [`SettingsForm::to_config`];
//! a field that does not parse yields a [`FormError`] naming it and nothing
//! is sent.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::error::ApiError;
use crate::net::types::{ArduinoConfig, CameraConfig, CameraKind, Config, Devices, Resolution, RotationConfig, SimulatorConfig};

/// Delay between a successful save and the redirect to the capture page.
pub const SAVE_REDIRECT_DELAY_MS: u32 = 1500;

pub const CUSTOM_PRESET: &str = "custom";

/// Resolution choices offered in the preset select.
pub const RESOLUTION_PRESETS: &[(&str, u32, u32)] = &[
    ("640x480", 640, 480),
    ("1280x720", 1280, 720),
    ("1920x1080", 1920, 1080),
    ("2560x1440", 2560, 1440),
    ("3840x2160", 3840, 2160),
];

/// Preset key matching a resolution, or `"custom"`.
#[must_use]
pub fn preset_for(width: u32, height: u32) -> &'static str {
    RESOLUTION_PRESETS
        .iter()
        .find(|(_, w, h)| *w == width && *h == height)
        .map_or(CUSTOM_PRESET, |(key, _, _)| key)
}

/// Resolution for a preset key. `None` for `"custom"` and unknown keys.
#[must_use]
pub fn preset_resolution(key: &str) -> Option<Resolution> {
    RESOLUTION_PRESETS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, width, height)| Resolution { width: *width, height: *height })
}

/// A settings field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a whole number, got \"{value}\"")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: u32, max: u32 },
    #[error("unknown camera type \"{0}\"")]
    UnknownCameraType(String),
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn parse_u32(field: &'static str, value: &str, min: u32, max: u32) -> Result<u32, FormError> {
    let trimmed = required(field, value)?;
    let Ok(n) = trimmed.parse::<u32>() else {
        return Err(FormError::NotANumber { field, value: trimmed });
    };
    if !(min..=max).contains(&n) {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(n)
}

/// Raw form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub device_path: String,
    pub camera_kind: String,
    pub preset: String,
    pub width: String,
    pub height: String,
    pub arduino_port: String,
    pub baudrate: String,
    pub default_degrees: String,
    pub default_interval: String,
    pub simulator_enabled: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SettingsForm {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let Resolution { width, height } = config.camera.resolution;
        Self {
            device_path: config.camera.device_path.clone(),
            camera_kind: config.camera.kind.as_str().to_owned(),
            preset: preset_for(width, height).to_owned(),
            width: width.to_string(),
            height: height.to_string(),
            arduino_port: config.arduino.port.clone(),
            baudrate: config.arduino.baudrate.to_string(),
            default_degrees: config.rotation.default_degrees.to_string(),
            default_interval: config.rotation.default_interval.to_string(),
            simulator_enabled: config.simulator.enabled,
        }
    }

    /// Select a preset. Known presets overwrite width and height; `"custom"`
    /// keeps whatever is typed.
    pub fn select_preset(&mut self, key: &str) {
        self.preset = key.to_owned();
        if let Some(Resolution { width, height }) = preset_resolution(key) {
            self.width = width.to_string();
            self.height = height.to_string();
        }
    }

    /// Typing into width or height re-derives the preset.
    pub fn sync_preset(&mut self) {
        let (Ok(width), Ok(height)) = (self.width.trim().parse::<u32>(), self.height.trim().parse::<u32>()) else {
            self.preset = CUSTOM_PRESET.to_owned();
            return;
        };
        self.preset = preset_for(width, height).to_owned();
    }

    /// Validate every field and build the full config to save.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] in form order.
    pub fn to_config(&self) -> Result<Config, FormError> {
        let kind = CameraKind::parse(self.camera_kind.trim())
            .ok_or_else(|| FormError::UnknownCameraType(self.camera_kind.clone()))?;
        Ok(Config {
            camera: CameraConfig {
                device_path: required("Device path", &self.device_path)?,
                kind,
                resolution: Resolution {
                    width: parse_u32("Width", &self.width, 1, 16_384)?,
                    height: parse_u32("Height", &self.height, 1, 16_384)?,
                },
            },
            arduino: ArduinoConfig {
                port: required("Serial port", &self.arduino_port)?,
                baudrate: parse_u32("Baud rate", &self.baudrate, 300, 4_000_000)?,
            },
            rotation: RotationConfig {
                default_degrees: parse_u32("Rotation step", &self.default_degrees, 1, 360)?,
                default_interval: parse_u32("Interval", &self.default_interval, 0, 3600)?,
            },
            simulator: SimulatorConfig { enabled: self.simulator_enabled },
        })
    }
}

/// Outcome of the last save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

impl SaveStatus {
    /// CSS modifier for the status banner.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Saving => "status--info",
            Self::Saved(_) => "status--success",
            Self::Failed(_) => "status--error",
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Saving => "Saving settings...".to_owned(),
            Self::Saved(message) => format!("{message}. Returning to capture..."),
            Self::Failed(message) => format!("Error saving settings: {message}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub form: SettingsForm,
    pub loading: bool,
    pub load_error: Option<String>,
    /// Last detected devices; `None` until the first scan finishes.
    pub devices: Option<Devices>,
    pub scanning_devices: bool,
    pub save: SaveStatus,
    /// Pretty-printed config shown by the "show current config" action.
    pub config_dump: Option<String>,
}

impl SettingsState {
    /// Mark a device scan as started. Returns `false` while one is already
    /// in flight, so repeated refresh clicks issue a single request.
    pub fn begin_device_scan(&mut self) -> bool {
        if self.scanning_devices {
            return false;
        }
        self.scanning_devices = true;
        true
    }

    /// A failed scan shows empty lists rather than keeping stale devices.
    pub fn finish_device_scan(&mut self, result: Result<Devices, ApiError>) {
        self.scanning_devices = false;
        self.devices = Some(result.unwrap_or_default());
    }
}

/// Pretty JSON for the current-config panel.
#[must_use]
pub fn pretty_config(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
