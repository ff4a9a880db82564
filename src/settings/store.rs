//! Settings store for reading and writing the settings file

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store for the given file; nothing is touched until load/save
    pub fn new(path: impl AsRef<Path>) -> Self {
        SettingsStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file, strictly
    pub fn try_load(&self) -> Result<Settings, SettingsError> {
        let json = fs::read_to_string(&self.path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    /// Reads the settings file, falling back to defaults on any fault
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }

        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Could not read settings from {}: {}; using defaults",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Saved volume, or the default when nothing usable is on disk
    pub fn get_volume(&self) -> f32 {
        self.load().volume
    }

    /// Writes the whole settings object
    ///
    /// The JSON goes to a sibling temp file first and is renamed over the
    /// target, so a failed write leaves the previous file intact.
    pub fn save(&self, settings: &Settings) -> Result<PathBuf, SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::info!("Settings saved to: {}", self.path.display());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.get_volume(), 0.5);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        store.save(&Settings { volume: 0.7 }).unwrap();
        assert_eq!(store.get_volume(), 0.7);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = SettingsStore::new(&path);

        let written = store.save(&Settings { volume: 0.2 }).unwrap();
        assert_eq!(written, path);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_missing_key_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "difficulty": "hard" }"#).unwrap();

        assert_eq!(SettingsStore::new(&path).get_volume(), 0.5);
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "volume = loud").unwrap();

        let store = SettingsStore::new(&path);
        assert!(store.try_load().is_err());
        assert_eq!(store.get_volume(), 0.5);
    }

    #[test]
    fn test_out_of_range_volume_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "volume": 3.5 }"#).unwrap();

        assert_eq!(SettingsStore::new(&path).get_volume(), 1.0);
    }

    #[test]
    fn test_unwritable_target_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        // The target is an existing directory, so the rename cannot succeed
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        let store = SettingsStore::new(&path);
        assert!(store.save(&Settings { volume: 0.3 }).is_err());
    }
}
