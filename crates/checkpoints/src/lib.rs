//! Named checkpoints and checkpoint-addressed document editing
//!
//! This crate provides:
//! - The checkpoint table (name -> path expression)
//! - `Session`: one document plus one table, edited by checkpoint name
//! - File binding for loading and saving both

pub mod files;
pub mod session;
pub mod table;

// Re-exports
pub use files::SessionFiles;
pub use session::Session;
pub use table::CheckpointTable;
pub use waypoint_core::{EditError, DEFAULT_INDEX_FIELD};

/// Result type for checkpoint-addressed edits
pub type Result<T> = std::result::Result<T, EditError>;
