use crate::{domain::Board, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

/// Storage trait for the single slot holding the whole board collection
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Loads every board in stored order
    ///
    /// An empty slot yields an empty collection. Malformed contents are
    /// reported as a serialization error; deciding what to do with that is
    /// up to the caller.
    async fn load_boards(&self) -> Result<Vec<Board>>;

    /// Replaces the slot contents with `boards`
    async fn save_boards(&self, boards: &[Board]) -> Result<()>;

    /// Checks if the slot has been written at least once
    async fn is_initialized(&self) -> bool;
}

pub(crate) fn encode_boards(boards: &[Board]) -> Result<String> {
    Ok(serde_json::to_string_pretty(boards)?)
}

/// Decodes raw slot bytes; bytes that are not UTF-8 JSON are a serialization error
pub(crate) fn decode_boards(contents: &[u8]) -> Result<Vec<Board>> {
    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(contents)?)
}
