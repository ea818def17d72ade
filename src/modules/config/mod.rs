use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::modules::utils::logging::parse_level;

pub const DEFAULT_STORE_FILE: &str = "web_app_lab.json";
pub const DEFAULT_LOG_FILE: &str = "web_app_lab.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error type for loading the host configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidLogLevel(String),
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid configuration: {}", e),
            ConfigError::InvalidLogLevel(level) => write!(f, "Unknown log level: {}", level),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings of the terminal host
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    pub store_path: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl HostConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut data = String::new();
        File::open(path)?.read_to_string(&mut data)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(store_path) = overrides.store_path {
            self.store_path = store_path;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.log_level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.store_path, PathBuf::from("web_app_lab.json"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log_level": "debug" }}"#).unwrap();

        let config = HostConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_load_errors() {
        let missing = HostConfig::load(Path::new("/nonexistent/web_app_lab.conf"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            HostConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = HostConfig::default().apply_overrides(ConfigOverrides {
            store_path: Some(PathBuf::from("other.json")),
            log_file: None,
            log_level: Some("verbose".to_string()),
        });
        assert_eq!(config.store_path, PathBuf::from("other.json"));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }
}
