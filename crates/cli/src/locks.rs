//! Advisory edit lock on the document
//!
//! Mutating commands hold an exclusive `flock` on `<document>.lock` from
//! load to save. The kernel drops the lock when the file is closed or the
//! process exits, so the lock file itself is never removed: unlinking it
//! would let a second process lock a fresh inode at the same path.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive edit lock, released on drop
pub struct DocumentLock {
    _file: File,
}

impl DocumentLock {
    /// Lock `document` for editing, failing if another process holds it
    pub fn acquire(document: &Path) -> Result<Self> {
        let lock_path = lock_path_for(document);

        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).context("Failed to create lock directory")?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {}", lock_path.display()))?;

        if !try_lock_exclusive(&file)? {
            anyhow::bail!(
                "Document {} is being edited by another process",
                document.display()
            );
        }

        // Holder's pid, for humans inspecting a stuck lock
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        tracing::trace!(path = %lock_path.display(), "Acquired document lock");
        Ok(Self { _file: file })
    }
}

fn lock_path_for(document: &Path) -> PathBuf {
    let mut name = document
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "document".into());
    name.push(".lock");
    document.with_file_name(name)
}

#[cfg(unix)]
fn try_lock_exclusive(file: &File) -> Result<bool> {
    use nix::fcntl::{flock, FlockArg};
    use std::os::unix::io::AsRawFd;

    match flock(file.as_raw_fd(), FlockArg::LockExclusiveNonblock) {
        Ok(()) => Ok(true),
        Err(nix::errno::Errno::EWOULDBLOCK) => Ok(false),
        Err(e) => Err(e).context("Failed to lock document"),
    }
}

#[cfg(not(unix))]
fn try_lock_exclusive(_file: &File) -> Result<bool> {
    Ok(true)
}
