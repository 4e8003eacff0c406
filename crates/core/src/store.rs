//! On-disk persistence for documents and checkpoint tables
//!
//! Files are pretty-printed JSON with a 4-space indent. Writes go through a
//! temporary file in the target directory and a rename, so a crash never
//! leaves a half-written file behind.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;

/// Load a JSON file, or `T::default()` when it does not exist
pub fn load_json_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Save a value as pretty-printed JSON
pub fn save_json_pretty<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    buf.push(b'\n');

    atomic_write(path, &buf)
}

/// Atomic write helper
///
/// Writes data to a temporary file beside the target, fsyncs it, then
/// renames it over the target path.
pub fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(())
}
