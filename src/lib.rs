//! # Kanban Store
//!
//! Board store and domain models for a single-user kanban board manager.
//!
//! Boards own ordered columns, columns own ordered cards and may carry a
//! work-in-progress limit. The [`BoardStore`] keeps the whole collection in
//! memory and writes it back to a single storage slot after every change,
//! without any dependency on a particular UI.

pub mod config;
pub mod domain;
pub mod error;
pub mod notice;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::StorageConfig;
pub use domain::{
    board::Board,
    card::{Card, CardUpdate},
    column::{Column, WipStatus},
    id::{BoardId, CardId, ColumnId},
};
pub use error::{CardAction, KanbanError, Result};
pub use notice::{Notice, Severity};
pub use storage::{memory_storage::MemoryStorage, Storage};
pub use store::BoardStore;

#[cfg(feature = "file-storage")]
pub use storage::file_storage::FileStorage;
