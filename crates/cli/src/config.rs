//! Configuration file handling
//!
//! Looked up in order: `--config`, `./waypoint.toml`, then
//! `<user config dir>/waypoint/config.toml`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked for in the working directory
pub const LOCAL_CONFIG_FILE: &str = "waypoint.toml";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document being edited
    pub document: PathBuf,
    /// Checkpoint table file
    pub checkpoints: PathBuf,
    /// Default index field for insert/remove
    pub index_field: String,
    /// Log level when no -v flag is given
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: PathBuf::from("document.json"),
            checkpoints: PathBuf::from("checkpoints.json"),
            index_field: waypoint_core::DEFAULT_INDEX_FIELD.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.index_field.is_empty() {
            anyhow::bail!("index_field must not be empty");
        }
        if self.document.as_os_str().is_empty() {
            anyhow::bail!("document must not be empty");
        }
        if self.checkpoints.as_os_str().is_empty() {
            anyhow::bail!("checkpoints must not be empty");
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            );
        }
        Ok(())
    }

    /// Read a value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "document" => self.document.display().to_string(),
            "checkpoints" => self.checkpoints.display().to_string(),
            "index_field" => self.index_field.clone(),
            "log_level" => self.log_level.clone(),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'wp config list' to see available keys.",
                key
            ),
        };
        Ok(value)
    }

    /// Set a value by key, validating the result
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "document" => self.document = PathBuf::from(value),
            "checkpoints" => self.checkpoints = PathBuf::from(value),
            "index_field" => self.index_field = value.to_string(),
            "log_level" => self.log_level = value.to_string(),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'wp config list' to see available keys.",
                key
            ),
        }
        self.validate().context("Invalid configuration value")
    }
}

/// Resolve which config file applies
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir().map(|dir| dir.join("waypoint").join("config.toml"))
}

/// Load config from a file, or defaults if it does not exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    Ok(config)
}

pub fn save_to(path: &Path, config: &Config) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    waypoint_core::atomic_write(path, contents.as_bytes())
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

/// Write defaults if the file does not exist yet
pub fn init_if_missing(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_to(path, &Config::default())?;
    Ok(true)
}

pub fn example_config() -> &'static str {
    r#"# Waypoint configuration

# JSON document being edited
document = "document.json"

# Checkpoint table (name -> path expression)
checkpoints = "checkpoints.json"

# Field renumbered by 'wp insert' and 'wp remove'
index_field = "index"

# error | warn | info | debug | trace
log_level = "warn"
"#
}
