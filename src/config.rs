//! Settings for the command-line binary
//!
//! Settings are read from an optional YAML or JSON file. Missing fields fall
//! back to their defaults; command-line flags override the file.

use crate::error::{Error, Result};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Page size used when neither the settings file nor the command line sets one
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Binary settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog file to serve; the embedded sample catalog when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default page size for `page` and `walk`
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Default log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::config(format!("Invalid settings YAML: {e}")))
    }

    /// Parse settings from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::config(format!("Invalid settings JSON: {e}")))
    }

    /// Load settings from a file, choosing YAML or JSON by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Load settings from an optional file; defaults when absent
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(settings.catalog.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings = Settings::from_yaml("log_level: DEBUG\n").unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_json_settings() {
        let settings =
            Settings::from_json(r#"{"catalog": "folders.json", "page_size": 20}"#).unwrap();
        assert_eq!(settings.catalog, Some(PathBuf::from("folders.json")));
        assert_eq!(settings.page_size, 20);
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempdir().unwrap();

        let yaml = dir.path().join("settings.yml");
        std::fs::write(&yaml, "page_size: 7\n").unwrap();
        assert_eq!(Settings::from_file(&yaml).unwrap().page_size, 7);

        let json = dir.path().join("settings.json");
        std::fs::write(&json, r#"{"page_size": 8}"#).unwrap();
        assert_eq!(Settings::from_file(&json).unwrap().page_size, 8);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let err = Settings::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Config);
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let err = Settings::from_yaml("page_size: [not, a, number]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Config);
    }
}
