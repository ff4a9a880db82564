//! Settings data and error types

use crate::audio::DEFAULT_VOLUME;
use serde::{Deserialize, Serialize};

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

/// The settings file contents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume, 0.0 (muted) to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Settings {
    /// Clamps out-of-range values read from disk
    pub fn sanitized(self) -> Self {
        Settings {
            volume: if self.volume.is_finite() {
                self.volume.clamp(0.0, 1.0)
            } else {
                DEFAULT_VOLUME
            },
        }
    }
}

/// Error types for settings I/O
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::SerializationError(err)
    }
}
