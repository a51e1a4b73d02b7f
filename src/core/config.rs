//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Desk configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Default output format for listings (table, plain, json, csv)
    pub format: Option<String>,

    /// Table border style (rounded, ascii, markdown, psql)
    pub style: Option<String>,

    /// Log filter directive, e.g. "clinic_desk=debug"
    pub log: Option<String>,

    /// Hide the menu banner and prompts
    pub quiet: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. User config (~/.config/clinic-desk/config.yaml)
        if let Some(path) = Self::global_config_path() {
            if let Some(file_config) = Self::from_file(&path) {
                config.merge(file_config);
            }
        }

        // 3. Environment variables
        config.apply_env_with(|key| std::env::var(key).ok());

        config
    }

    /// Get the path to the user config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "clinic-desk")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Read a config file, ignoring it if missing or unparseable
    pub fn from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Overlay `CLINIC_DESK_*` variables using the given lookup
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("CLINIC_DESK_FORMAT") {
            self.format = Some(format);
        }
        if let Some(style) = lookup("CLINIC_DESK_STYLE") {
            self.style = Some(style);
        }
        if let Some(log) = lookup("CLINIC_DESK_LOG") {
            self.log = Some(log);
        }
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.style.is_some() {
            self.style = other.style;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
    }

    /// Log filter, falling back to warnings (or debug when verbose)
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            return "clinic_desk=debug".to_string();
        }
        self.log
            .clone()
            .unwrap_or_else(|| "clinic_desk=warn".to_string())
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> String {
        serde_yml::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_file_values_are_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "format: json\nstyle: ascii\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.style.as_deref(), Some("ascii"));
        assert_eq!(config.log, None);
    }

    #[test]
    fn test_missing_or_broken_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        assert!(Config::from_file(&tmp.path().join("absent.yaml")).is_none());

        let broken = tmp.path().join("broken.yaml");
        std::fs::write(&broken, "format: [unterminated").unwrap();
        assert!(Config::from_file(&broken).is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config {
            format: Some("csv".to_string()),
            style: Some("psql".to_string()),
            ..Config::default()
        };
        let env: HashMap<&str, &str> = [("CLINIC_DESK_FORMAT", "plain")].into_iter().collect();
        config.apply_env_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.format.as_deref(), Some("plain"));
        assert_eq!(config.style.as_deref(), Some("psql"));
    }

    #[test]
    fn test_merge_keeps_unset_values() {
        let mut base = Config {
            log: Some("clinic_desk=info".to_string()),
            quiet: Some(true),
            ..Config::default()
        };
        base.merge(Config {
            format: Some("json".to_string()),
            ..Config::default()
        });

        assert_eq!(base.format.as_deref(), Some("json"));
        assert_eq!(base.log.as_deref(), Some("clinic_desk=info"));
        assert_eq!(base.quiet, Some(true));
    }

    #[test]
    fn test_log_filter() {
        let config = Config::default();
        assert_eq!(config.log_filter(false), "clinic_desk=warn");
        assert_eq!(config.log_filter(true), "clinic_desk=debug");

        let custom = Config {
            log: Some("clinic_desk=trace".to_string()),
            ..Config::default()
        };
        assert_eq!(custom.log_filter(false), "clinic_desk=trace");
    }
}
