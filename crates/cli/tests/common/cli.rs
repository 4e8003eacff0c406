//! Runs the `wp` binary against a scratch directory
//!
//! Every run passes `--config <dir>/waypoint.toml` so user config never
//! leaks into a test.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Captured output of one `wp` run
#[derive(Debug)]
pub struct Run {
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl Run {
    /// Pass through a zero exit, otherwise fail with the captured output
    pub fn succeeded(self) -> Result<Self> {
        if self.code != Some(0) {
            anyhow::bail!("wp {:?} exited with {:?}\n{}", self.args, self.code, self.stderr);
        }
        Ok(self)
    }

    /// Pass through a non-zero exit
    pub fn failed(self) -> Result<Self> {
        if self.code == Some(0) {
            anyhow::bail!("wp {:?} unexpectedly succeeded\n{}", self.args, self.stdout);
        }
        Ok(self)
    }
}

pub fn run(dir: &Path, args: &[&str]) -> Result<Run> {
    let config = dir.join("waypoint.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_wp"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .current_dir(dir)
        .output()
        .context("Failed to spawn wp")?;

    Ok(Run {
        args: args.iter().map(|s| s.to_string()).collect(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    })
}

/// `wp!(dir, "get", "items")` runs `wp get items` inside `dir`
#[macro_export]
macro_rules! wp {
    ($dir:expr, $($arg:expr),+ $(,)?) => {
        $crate::common::cli::run($dir, &[$($arg),+])
    };
}
