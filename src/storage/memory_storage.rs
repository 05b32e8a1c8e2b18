use crate::{
    domain::Board,
    error::Result,
    storage::{decode_boards, encode_boards, Storage},
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory slot holding the serialized collection, like a browser's local storage entry
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw slot contents, which need not be valid
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }

    /// Raw slot contents, if anything was ever written
    pub async fn contents(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn load_boards(&self) -> Result<Vec<Board>> {
        match self.slot.lock().await.as_deref() {
            Some(contents) => decode_boards(contents.as_bytes()),
            None => Ok(Vec::new()),
        }
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        let json = encode_boards(boards)?;
        *self.slot.lock().await = Some(json);
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
