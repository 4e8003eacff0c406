//! Scratch documents for integration tests

use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A document, checkpoint table and config file in a temp directory
pub struct TestDocument {
    dir: TempDir,
}

impl TestDocument {
    /// Create a scratch directory holding `document`
    pub fn new(document: &Value) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            dir.path().join("document.json"),
            serde_json::to_string_pretty(document).unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    /// Create a scratch directory without any files
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn document_path(&self) -> PathBuf {
        self.dir().join("document.json")
    }

    pub fn checkpoints_path(&self) -> PathBuf {
        self.dir().join("checkpoints.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir().join("waypoint.toml")
    }

    /// Current document contents
    pub fn document(&self) -> Value {
        read_json(&self.document_path())
    }

    /// Current checkpoint file contents
    pub fn checkpoints(&self) -> Value {
        read_json(&self.checkpoints_path())
    }
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&text).unwrap()
}
