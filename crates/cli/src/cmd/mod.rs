//! CLI command implementations

pub mod append;
pub mod checkpoint;
pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod insert;
pub mod paths;
pub mod remove;
pub mod set;

use crate::config::Config;
use crate::locks::DocumentLock;
use anyhow::Result;
use checkpoints::{Session, SessionFiles};
use std::path::PathBuf;

/// Settings every command runs with
pub struct Context {
    pub files: SessionFiles,
    pub index_field: String,
}

impl Context {
    /// Build from config, with command-line paths taking precedence
    pub fn new(config: &Config, document: Option<PathBuf>, checkpoints: Option<PathBuf>) -> Self {
        Self {
            files: SessionFiles::new(
                document.unwrap_or_else(|| config.document.clone()),
                checkpoints.unwrap_or_else(|| config.checkpoints.clone()),
            ),
            index_field: config.index_field.clone(),
        }
    }

    /// Load document and checkpoints for reading
    pub fn load(&self) -> Result<Session> {
        self.files.load()
    }

    pub fn lock(&self) -> Result<DocumentLock> {
        DocumentLock::acquire(&self.files.document)
    }

    /// Lock, load, apply `op`, and save the document if it succeeded
    pub fn edit_document<T>(
        &self,
        op: impl FnOnce(&mut Session) -> checkpoints::Result<T>,
    ) -> Result<T> {
        let _lock = self.lock()?;
        let mut session = self.load()?;
        let out = op(&mut session)?;
        self.files.save_document(&session)?;
        Ok(out)
    }

    /// Lock, load, apply `op`, and save the checkpoint table if it succeeded
    pub fn edit_checkpoints<T>(
        &self,
        op: impl FnOnce(&mut Session) -> checkpoints::Result<T>,
    ) -> Result<(T, Session)> {
        let _lock = self.lock()?;
        let mut session = self.load()?;
        let out = op(&mut session)?;
        self.files.save_checkpoints(&session)?;
        Ok((out, session))
    }
}
