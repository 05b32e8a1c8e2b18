use crate::{
    config::StorageConfig,
    domain::Board,
    error::Result,
    storage::{decode_boards, encode_boards, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: the slot is one JSON file under the root directory
pub struct FileStorage {
    root_path: PathBuf,
    slot: String,
}

impl FileStorage {
    /// Creates a new FileStorage using the default slot name
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::from_config(&StorageConfig::new(root))
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            root_path: config.root.clone(),
            slot: config.slot.clone(),
        }
    }

    pub fn slot_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json", self.slot))
    }

    fn temp_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json.tmp", self.slot))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn load_boards(&self) -> Result<Vec<Board>> {
        let slot_file = self.slot_file();

        if !slot_file.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read(&slot_file).await?;
        decode_boards(&contents)
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = encode_boards(boards)?;

        // Write then rename so a crash never leaves a half-written slot
        let temp_file = self.temp_file();
        fs::write(&temp_file, json).await?;
        if let Err(err) = fs::rename(&temp_file, self.slot_file()).await {
            let _ = fs::remove_file(&temp_file).await;
            return Err(err.into());
        }

        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.slot_file().exists()
    }
}
