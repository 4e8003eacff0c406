//! File binding for a session's document and checkpoint table

use crate::{CheckpointTable, Session};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a session's document and checkpoint table live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFiles {
    pub document: PathBuf,
    pub checkpoints: PathBuf,
}

impl SessionFiles {
    pub fn new(document: impl Into<PathBuf>, checkpoints: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            checkpoints: checkpoints.into(),
        }
    }

    /// Load both files. Missing files yield an empty mapping and an empty
    /// table.
    pub fn load(&self) -> Result<Session> {
        let document = if self.document.exists() {
            waypoint_core::load_json_or_default(&self.document)
                .context("Failed to load document")?
        } else {
            Value::Object(Map::new())
        };
        let checkpoints = CheckpointTable::load(&self.checkpoints)
            .context("Failed to load checkpoints")?;

        Ok(Session::new(document, checkpoints))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        self.save_document(session)?;
        self.save_checkpoints(session)
    }

    pub fn save_document(&self, session: &Session) -> Result<()> {
        save_document_to(session, &self.document)
    }

    pub fn save_checkpoints(&self, session: &Session) -> Result<()> {
        session
            .checkpoints()
            .save(&self.checkpoints)
            .context("Failed to save checkpoints")?;
        info!(path = %self.checkpoints.display(), count = session.checkpoints().len(), "Saved checkpoints");
        Ok(())
    }
}

/// Write the session's document to an arbitrary file
pub fn save_document_to(session: &Session, path: &Path) -> Result<()> {
    waypoint_core::save_json_pretty(path, session.document())
        .context("Failed to save document")?;
    info!(path = %path.display(), "Saved document");
    Ok(())
}
