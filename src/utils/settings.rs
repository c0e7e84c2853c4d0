//! User settings file.
//!
//! `$HOME/.commit-gate/settings.json` (or the file named by
//! `COMMIT_GATE_SETTINGS`) holds an `env` map whose entries stand in for
//! unset environment variables:
//!
//! ```json
//! { "env": { "COMMIT_GATE_SUBJECT_LIMIT": "60" } }
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{BODY_LIMIT_VAR, SUBJECT_LIMIT_VAR, TAGGER_COMMAND_VAR};

/// Environment variable naming an alternative settings file.
pub const SETTINGS_PATH_VAR: &str = "COMMIT_GATE_SETTINGS";

/// Keys the settings `env` map may carry.
const KNOWN_KEYS: [&str; 3] = [SUBJECT_LIMIT_VAR, BODY_LIMIT_VAR, TAGGER_COMMAND_VAR];

/// Contents of the settings file.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Fallback values for the `COMMIT_GATE_*` environment variables.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Settings {
    /// Loads the settings file, or empty settings if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::get_settings_path()?)
    }

    /// Loads settings from `path`; a missing file yields empty settings.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings file: {}", path.display()));
            }
        };

        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        for key in settings.env.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!("Ignoring unknown key {key:?} in {}", path.display());
            }
        }

        Ok(settings)
    }

    /// Returns the settings file location, honoring `COMMIT_GATE_SETTINGS`.
    pub fn get_settings_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(SETTINGS_PATH_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home_dir.join(".commit-gate").join("settings.json"))
    }

    /// Looks `key` up in the process environment, then in the settings file.
    ///
    /// Blank values count as unset in both places.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.setting(key))
    }

    /// Returns the settings file value for `key`, ignoring the environment.
    pub fn setting(&self, key: &str) -> Option<String> {
        self.env
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_settings(json: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, json).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn reads_env_map() {
        let (_dir, path) = write_settings(
            r#"{
                "env": {
                    "COMMIT_GATE_SUBJECT_LIMIT": "60",
                    "COMMIT_GATE_TAGGER_COMMAND": "tagger --stdin"
                }
            }"#,
        );

        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.setting(SUBJECT_LIMIT_VAR).as_deref(), Some("60"));
        assert_eq!(
            settings.setting(TAGGER_COMMAND_VAR).as_deref(),
            Some("tagger --stdin")
        );
        assert_eq!(settings.setting(BODY_LIMIT_VAR), None);
    }

    #[test]
    fn missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn file_without_env_map_is_empty() {
        let (_dir, path) = write_settings("{}");
        assert!(Settings::load_from_path(&path).unwrap().env.is_empty());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let (_dir, path) = write_settings("{ not json");
        let err = Settings::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn unknown_keys_are_kept_but_unused() {
        let (_dir, path) = write_settings(r#"{ "env": { "COMMIT_GATE_COLOUR": "always" } }"#);
        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.env.len(), 1);
        assert_eq!(settings.setting(SUBJECT_LIMIT_VAR), None);
    }

    #[test]
    fn blank_setting_counts_as_unset() {
        let (_dir, path) = write_settings(r#"{ "env": { "COMMIT_GATE_BODY_LIMIT": "  " } }"#);
        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.setting(BODY_LIMIT_VAR), None);
    }

    #[test]
    fn environment_takes_precedence() {
        let (_dir, path) =
            write_settings(r#"{ "env": { "COMMIT_GATE_TEST_PRECEDENCE": "from_settings" } }"#);
        let settings = Settings::load_from_path(&path).unwrap();

        env::set_var("COMMIT_GATE_TEST_PRECEDENCE", "from_env");
        assert_eq!(
            settings.get_env_var("COMMIT_GATE_TEST_PRECEDENCE").as_deref(),
            Some("from_env")
        );

        env::set_var("COMMIT_GATE_TEST_PRECEDENCE", "");
        assert_eq!(
            settings.get_env_var("COMMIT_GATE_TEST_PRECEDENCE").as_deref(),
            Some("from_settings")
        );

        env::remove_var("COMMIT_GATE_TEST_PRECEDENCE");
        assert_eq!(
            settings.get_env_var("COMMIT_GATE_TEST_PRECEDENCE").as_deref(),
            Some("from_settings")
        );
        assert!(settings.get_env_var("COMMIT_GATE_TEST_UNSET").is_none());
    }
}
