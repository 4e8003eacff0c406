//! Document model and path resolution for Waypoint
//!
//! This crate provides:
//! - JSONPath-style path expressions and in-place location of matches
//! - Kind-preserving scalar coercion
//! - Sequence insert/remove with index-field renumbering
//! - Document outline (addressable locations)
//! - Pretty-printed, atomically written JSON persistence

pub mod error;
pub mod outline;
pub mod path;
pub mod sequence;
pub mod store;
pub mod value;

// Re-exports
pub use error::EditError;
pub use outline::{outline, OutlineEntry, OutlineKind};
pub use path::{JsonPath, Location, Segment};
pub use sequence::{insert_reindexed, reindex_all, reindex_present, remove_reindexed};
pub use store::{atomic_write, load_json_or_default, save_json_pretty};
pub use value::{coerce_scalar, ValueKind};

/// Default key used to store an element's position within its sequence
pub const DEFAULT_INDEX_FIELD: &str = "index";

/// Result type for document edits
pub type Result<T> = std::result::Result<T, EditError>;
