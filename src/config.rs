//! Game configuration
//!
//! Window, timing and path settings loaded from `assets/config/game.json`.
//! Every field has a default, so a missing or partial file still yields a
//! complete configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,

    /// Logical resolution; the window is scaled, input stays in these units
    pub screen_width: u32,
    pub screen_height: u32,

    /// Target frames per second
    pub fps: u32,

    /// Upper bound for a single frame's delta time (ms)
    pub max_frame_ms: f32,

    /// Root directory for images, sounds and dialogue scripts
    pub assets_dir: PathBuf,

    /// Overrides the per-user settings file location
    pub settings_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Rocket Clash".to_string(),
            screen_width: 800,
            screen_height: 600,
            fps: 60,
            max_frame_ms: 250.0,
            assets_dir: PathBuf::from("assets"),
            settings_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads the config, falling back to defaults on any fault
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return GameConfig::default();
        }

        match GameConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                GameConfig::default()
            }
        }
    }

    /// Duration of one frame at the target rate, in milliseconds
    pub fn frame_ms(&self) -> f32 {
        1000.0 / self.fps.max(1) as f32
    }

    /// Resolves an asset key such as `gui/main_menu_bg.png`
    pub fn asset_path(&self, key: &str) -> PathBuf {
        self.assets_dir.join(key)
    }

    /// Settings file location: explicit override, then the user config dir
    pub fn settings_file(&self) -> PathBuf {
        if let Some(path) = &self.settings_path {
            return path.clone();
        }

        dirs::config_dir()
            .map(|p| p.join("rocket-clash").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("./settings.json"))
    }
}
