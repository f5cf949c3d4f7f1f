//! Local preference storage
//!
//! A single theme flag persisted as JSON in the work directory. Loading
//! is tolerant: any missing or corrupt file yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// UI theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted local preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// JSON-file-backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store under the given base directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join("preferences.json");
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save preferences
    pub fn save(&self, prefs: &Preferences) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)
    }

    /// Load preferences, falling back to defaults on any failure
    pub fn load(&self) -> Preferences {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Preferences::default();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    /// Storage path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path());

        store
            .save(&Preferences { theme: Theme::Dark })
            .unwrap();
        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path());
        assert_eq!(store.load().theme, Theme::Light);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path());
        store.ensure_dir().unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load().theme, Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
