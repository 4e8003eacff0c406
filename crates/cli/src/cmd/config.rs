//! Configuration management command
//!
//! Provides CLI interface to view and edit the config file.

use crate::config::{self, Config};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

fn require_path(path: Option<&Path>) -> Result<&Path> {
    path.context("Could not determine config file path")
}

fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => config::load_from(path),
        None => Ok(Config::default()),
    }
}

/// List all configuration values
pub fn run_list(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;

    println!("{}", "Configuration".bold());
    if let Some(path) = path {
        println!("{}: {}\n", "Location".dimmed(), path.display().dimmed());
    }

    for key in ["document", "checkpoints", "index_field", "log_level"] {
        println!("  {} = {}", key.cyan(), config.get(key)?);
    }

    println!("\n{}", "Valid Values:".bold());
    println!("  index_field: any non-empty key");
    println!("  log_level: error, warn, info, debug, trace");

    Ok(())
}

/// Get a single configuration value
pub fn run_get(path: Option<&Path>, key: &str) -> Result<()> {
    let config = load(path)?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn run_set(path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let path = require_path(path)?;
    let mut config = config::load_from(path)?;

    config.set(key, value)?;
    config::save_to(path, &config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(path: Option<&Path>, create: bool) -> Result<()> {
    let path = require_path(path)?;

    if create && config::init_if_missing(path)? {
        println!("{} Created config file at: {}", "✓".green(), path.display());
    } else {
        println!("{}", path.display());
        if !path.exists() {
            println!("{}", "File does not exist. Use --create to create it.".yellow());
        }
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}
