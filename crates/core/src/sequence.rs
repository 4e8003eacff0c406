//! Sequence insert/remove with index-field renumbering
//!
//! Elements of a sequence that are mappings may carry an index field whose
//! value mirrors their zero-based position. Insert writes the field on every
//! mapping element; remove only rewrites elements that already carry it.

use crate::{EditError, Result};
use serde_json::Value;

/// Insert `element` and renumber every mapping element.
///
/// `None` or a position at or beyond the end appends.
pub fn insert_reindexed(
    items: &mut Vec<Value>,
    element: Value,
    position: Option<usize>,
    index_field: &str,
) -> usize {
    let at = match position {
        Some(p) if p < items.len() => p,
        _ => items.len(),
    };
    items.insert(at, element);
    reindex_all(items, index_field);
    at
}

/// Remove the element at `position`, renumbering remaining mapping
/// elements that already carry `index_field` when one is given.
///
/// An empty field name counts as no field.
pub fn remove_reindexed(
    items: &mut Vec<Value>,
    position: usize,
    index_field: Option<&str>,
) -> Result<Value> {
    if position >= items.len() {
        return Err(EditError::IndexOutOfRange {
            index: position,
            len: items.len(),
        });
    }

    let removed = items.remove(position);
    if let Some(field) = index_field.filter(|f| !f.is_empty()) {
        reindex_present(items, field);
    }
    Ok(removed)
}

/// Write each mapping element's position into `index_field`, creating the
/// field where it is missing.
pub fn reindex_all(items: &mut [Value], index_field: &str) {
    for (position, item) in items.iter_mut().enumerate() {
        if let Value::Object(map) = item {
            map.insert(index_field.to_string(), Value::from(position));
        }
    }
}

/// Rewrite `index_field` on mapping elements that already have it.
pub fn reindex_present(items: &mut [Value], index_field: &str) {
    for (position, item) in items.iter_mut().enumerate() {
        if let Some(slot) = item
            .as_object_mut()
            .and_then(|map| map.get_mut(index_field))
        {
            *slot = Value::from(position);
        }
    }
}
