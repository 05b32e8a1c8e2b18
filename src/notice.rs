//! Messages for the notification layer.
//!
//! The store never displays anything; callers turn outcomes into a
//! [`Notice`] and hand it to whatever shows transient messages.

use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn board_created(name: &str) -> Self {
        Self::success(format!("Board \"{}\" created", name))
    }

    pub fn board_updated(name: &str) -> Self {
        Self::success(format!("Board \"{}\" updated", name))
    }

    pub fn column_created(title: &str) -> Self {
        Self::success(format!("Column \"{}\" created", title))
    }

    pub fn column_updated(title: &str) -> Self {
        Self::success(format!("Column \"{}\" updated", title))
    }

    pub fn card_created(title: &str) -> Self {
        Self::success(format!("Card \"{}\" created", title))
    }

    pub fn card_updated(title: &str) -> Self {
        Self::success(format!("Card \"{}\" updated", title))
    }

    /// Error notice for a failed operation
    pub fn from_error(error: &KanbanError) -> Self {
        Self::error(format!("{}.", error))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
