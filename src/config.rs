use crate::error::{KanbanError, Result};
use std::path::{Path, PathBuf};

/// Where the board collection is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub root: PathBuf,
    pub slot: String,
}

impl StorageConfig {
    /// Name of the slot holding the serialized boards
    pub const DEFAULT_SLOT: &'static str = "kanban_boards";

    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            slot: Self::DEFAULT_SLOT.to_string(),
        }
    }

    /// Uses a different slot name; it doubles as a file stem
    pub fn with_slot(mut self, slot: impl Into<String>) -> Result<Self> {
        let slot = slot.into();
        validate_slot(&slot)?;
        self.slot = slot;
        Ok(self)
    }
}

fn validate_slot(slot: &str) -> Result<()> {
    if slot.is_empty() {
        return Err(KanbanError::ConfigError(
            "slot name cannot be empty".to_string(),
        ));
    }

    if !slot
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(KanbanError::ConfigError(format!(
            "invalid slot name '{}': use ASCII letters, digits, '_' or '-'",
            slot
        )));
    }

    Ok(())
}
