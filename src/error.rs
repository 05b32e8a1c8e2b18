use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

/// What the caller was trying to do with a card when a WiP limit got in the way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Add,
    Move,
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Move => write!(f, "move"),
        }
    }
}

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error(
        "Cannot {action} the card: the WiP limit of column \"{column}\" ({limit}) would be exceeded"
    )]
    WipLimitExceeded {
        action: CardAction,
        column: String,
        limit: u32,
    },

    #[error("{0} title cannot be empty")]
    EmptyTitle(&'static str),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl KanbanError {
    /// True for failures the user caused and can fix from the board itself
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::WipLimitExceeded { .. } | Self::EmptyTitle(_) | Self::DuplicateId { .. }
        )
    }
}
