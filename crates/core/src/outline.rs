//! Document outline: the locations a checkpoint can be bound to

use crate::path::JsonPath;
use serde_json::Value;

/// What an outline entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// A sequence (target for insert/remove)
    Sequence,
    /// A scalar, or an empty mapping
    Value,
}

/// A single addressable location in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub path: JsonPath,
    pub kind: OutlineKind,
}

/// List the locations of a document in document order.
///
/// Mappings are descended into; sequences and scalars end a branch. An
/// empty root mapping yields nothing.
pub fn outline(root: &Value) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    match root {
        Value::Object(map) => {
            for (key, value) in map {
                walk(value, JsonPath::root().field(key.as_str()), &mut entries);
            }
        }
        other => walk(other, JsonPath::root(), &mut entries),
    }
    entries
}

fn walk(value: &Value, path: JsonPath, entries: &mut Vec<OutlineEntry>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                walk(child, path.clone().field(key.as_str()), entries);
            }
        }
        Value::Array(_) => entries.push(OutlineEntry {
            path,
            kind: OutlineKind::Sequence,
        }),
        _ => entries.push(OutlineEntry {
            path,
            kind: OutlineKind::Value,
        }),
    }
}
