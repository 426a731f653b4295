//! Configuration management

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "AZBLOG_CONFIG";

/// Keys accepted by `get`/`set`
pub const CONFIG_KEYS: [&str; 5] = [
    "seed_samples",
    "confirm_delete",
    "list_date_format",
    "detail_date_format",
    "log_filter",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start each session with the sample posts
    pub seed_samples: bool,
    /// Ask before deleting in the interactive session
    pub confirm_delete: bool,
    /// chrono format for dates in the post list
    pub list_date_format: String,
    /// chrono format for the date on the detail view
    pub detail_date_format: String,
    /// tracing filter used when AZBLOG_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_samples: true,
            confirm_delete: true,
            list_date_format: "%b %-d, %Y".to_string(),
            detail_date_format: "%B %-d, %Y".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Resolve the config file location: explicit path first, then AZBLOG_CONFIG
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load config from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BlogError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            BlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a TOML file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get a single config value as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "seed_samples" => Ok(self.seed_samples.to_string()),
            "confirm_delete" => Ok(self.confirm_delete.to_string()),
            "list_date_format" => Ok(self.list_date_format.clone()),
            "detail_date_format" => Ok(self.detail_date_format.clone()),
            "log_filter" => Ok(self.log_filter.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single config value from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed_samples" => self.seed_samples = parse_bool(key, value)?,
            "confirm_delete" => self.confirm_delete = parse_bool(key, value)?,
            "list_date_format" => self.list_date_format = value.to_string(),
            "detail_date_format" => self.detail_date_format = value.to_string(),
            "log_filter" => self.log_filter = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// All keys with their current values, in a fixed order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> BlogError {
    BlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(BlogError::Config(format!(
            "Invalid value for {}: '{}' (expected true or false)",
            key, value
        ))),
    }
}
