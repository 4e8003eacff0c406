//! Checkpoint-addressed editing of a single document
//!
//! Every operation resolves the checkpoint name to a path, resolves the path
//! against the current document, validates, and only then mutates. A failed
//! operation leaves the document as it was.

use crate::{CheckpointTable, EditError, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use waypoint_core::{
    coerce_scalar, insert_reindexed, remove_reindexed, JsonPath, Location, ValueKind,
};

/// One document and the checkpoints that address it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    document: Value,
    checkpoints: CheckpointTable,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()), CheckpointTable::new())
    }
}

impl Session {
    pub fn new(document: Value, checkpoints: CheckpointTable) -> Self {
        Self {
            document,
            checkpoints,
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Bind a checkpoint name to a path expression.
    ///
    /// The expression must parse; it does not have to resolve yet.
    pub fn add_checkpoint(&mut self, name: &str, path: &str) -> Result<Option<String>> {
        JsonPath::parse(path)?;
        debug!(name, path, "Adding checkpoint");
        Ok(self.checkpoints.add(name, path))
    }

    pub fn remove_checkpoint(&mut self, name: &str) -> Result<String> {
        let path = self.checkpoints.remove(name)?;
        debug!(name, path = %path, "Removed checkpoint");
        Ok(path)
    }

    /// Checkpoints whose current value is a sequence.
    ///
    /// Checkpoints that no longer resolve are skipped.
    pub fn sequence_checkpoints(&self) -> Vec<(&str, &str)> {
        self.checkpoints
            .iter()
            .filter(|(name, path)| match self.read_path(path) {
                Ok(value) => value.is_array(),
                Err(err) => {
                    warn!(checkpoint = *name, error = %err, "Skipping unresolved checkpoint");
                    false
                }
            })
            .collect()
    }

    /// Read the value at a raw path expression
    pub fn read_path(&self, path: &str) -> Result<&Value> {
        JsonPath::parse(path)?
            .get(&self.document)
            .ok_or_else(|| EditError::PathNotFound(path.to_string()))
    }

    /// Read the value a checkpoint points at
    pub fn read(&self, checkpoint: &str) -> Result<&Value> {
        let path = self.checkpoints.resolve(checkpoint)?;
        self.read_path(path)
    }

    /// Replace a number or string, keeping its kind.
    ///
    /// Returns `(old, new)`.
    pub fn update_scalar(&mut self, checkpoint: &str, new_value: &str) -> Result<(Value, Value)> {
        let mut location = locate(&mut self.document, &self.checkpoints, checkpoint)?;
        let coerced = coerce_scalar(location.get(), new_value)?;
        let old = location.replace(coerced.clone());

        debug!(checkpoint, old = %old, new = %coerced, "Updated value");
        Ok((old, coerced))
    }

    /// Insert an element into a sequence and renumber `index_field` on
    /// every mapping element.
    ///
    /// `None` or a position past the end appends. Returns the position the
    /// element landed at.
    pub fn insert_into_sequence(
        &mut self,
        checkpoint: &str,
        element: Value,
        position: Option<usize>,
        index_field: &str,
    ) -> Result<usize> {
        let items = sequence(&mut self.document, &self.checkpoints, checkpoint)?;
        let at = insert_reindexed(items, element, position, index_field);

        debug!(checkpoint, position = at, index_field, len = items.len(), "Inserted element");
        Ok(at)
    }

    /// Remove an element from a sequence.
    ///
    /// With an index field, remaining mapping elements that carry it are
    /// renumbered; elements without it are left alone.
    pub fn delete_from_sequence(
        &mut self,
        checkpoint: &str,
        position: usize,
        index_field: Option<&str>,
    ) -> Result<Value> {
        let items = sequence(&mut self.document, &self.checkpoints, checkpoint)?;
        let removed = remove_reindexed(items, position, index_field)?;

        debug!(checkpoint, position, ?index_field, len = items.len(), "Removed element");
        Ok(removed)
    }

    /// Append to a sequence without any index bookkeeping
    pub fn append_to_sequence(&mut self, checkpoint: &str, value: Value) -> Result<()> {
        let items = sequence(&mut self.document, &self.checkpoints, checkpoint)?;
        items.push(value);

        debug!(checkpoint, len = items.len(), "Appended element");
        Ok(())
    }

    /// Remove from a sequence without any index bookkeeping
    pub fn delete_at(&mut self, checkpoint: &str, index: usize) -> Result<Value> {
        self.delete_from_sequence(checkpoint, index, None)
    }
}

fn locate<'a>(
    document: &'a mut Value,
    checkpoints: &CheckpointTable,
    checkpoint: &str,
) -> Result<Location<'a>> {
    let path = checkpoints.resolve(checkpoint)?;
    JsonPath::parse(path)?
        .locate(document)
        .ok_or_else(|| EditError::PathNotFound(path.to_string()))
}

fn sequence<'a>(
    document: &'a mut Value,
    checkpoints: &CheckpointTable,
    checkpoint: &str,
) -> Result<&'a mut Vec<Value>> {
    match locate(document, checkpoints, checkpoint)?.into_mut() {
        Value::Array(items) => Ok(items),
        other => Err(EditError::NotASequence {
            path: checkpoints.resolve(checkpoint)?.to_string(),
            kind: ValueKind::of(other),
        }),
    }
}
