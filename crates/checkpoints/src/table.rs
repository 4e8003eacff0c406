//! Checkpoint table: stable names for path expressions

use crate::{EditError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from checkpoint name to path expression
///
/// Serialized as a flat JSON object. Adding an existing name overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointTable {
    entries: BTreeMap<String, String>,
}

impl CheckpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `path`, returning the path it replaced
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), path.into())
    }

    /// Look up the path bound to `name`
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| EditError::UnknownCheckpoint(name.to_string()))
    }

    /// Unbind `name`, returning its path
    pub fn remove(&mut self, name: &str) -> Result<String> {
        self.entries
            .remove(name)
            .ok_or_else(|| EditError::UnknownCheckpoint(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(name, path)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }

    /// Load a table, or an empty one when the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        waypoint_core::load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        waypoint_core::save_json_pretty(path, self)
    }
}
