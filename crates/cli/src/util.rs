//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use serde_json::Value;
use waypoint_core::ValueKind;

/// Parse a command-line argument as a JSON value
pub fn parse_json_arg(input: &str) -> Result<Value> {
    serde_json::from_str(input)
        .with_context(|| format!("Invalid JSON: {}", input))
}

/// Parse as JSON, falling back to a plain string
///
/// `42` -> number, `"42"` -> string, `reading` -> string.
pub fn parse_json_or_string(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

/// Compact single-line rendering of a value
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Shorten long renderings for one-line status messages
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Short label for a value's kind, used in listings
pub fn kind_label(value: &Value) -> &'static str {
    match ValueKind::of(value) {
        ValueKind::Integer => "integer",
        ValueKind::Float => "float",
        ValueKind::String => "string",
        ValueKind::Boolean => "boolean",
        ValueKind::Null => "null",
        ValueKind::Sequence => "sequence",
        ValueKind::Mapping => "mapping",
    }
}
