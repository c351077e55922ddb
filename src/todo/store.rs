//! JSON file persistence for the to-do list.

use super::TodoList;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A to-do list stored as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Creates a store backed by `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the list. A missing file is an empty list.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<TodoList> {
        if !self.path.exists() {
            debug!("Store file missing, starting empty");
            return Ok(TodoList::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let list: TodoList = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        debug!(tasks = list.tasks().len(), "Store loaded");
        Ok(list)
    }

    /// Writes the list, replacing the file.
    #[instrument(skip(self, list), fields(path = %self.path.display()))]
    pub fn save(&self, list: &TodoList) -> Result<()> {
        let content = serde_json::to_string_pretty(list)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(tasks = list.tasks().len(), "Store saved");
        Ok(())
    }
}
