use crate::domain::id::CardId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single work item on a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card with a generated ID
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(CardId::generate(), title)
    }

    /// Creates a new card with a caller-chosen ID
    pub fn with_id(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(description.into());
        self
    }

    /// Applies a patch, keeping every field the patch leaves out
    pub fn apply(&mut self, update: CardUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = normalize_description(description);
        }
    }
}

/// Partial edit of a card
///
/// `description: Some("")` clears the description, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CardUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn normalize_description(description: String) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("Task A");
        assert_eq!(card.title, "Task A");
        assert!(card.description.is_none());
        assert!(card.id.as_str().starts_with("card_"));
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let card = Card::with_id(CardId::from("k1"), "Task").with_description("   ");
        assert!(card.description.is_none());

        let card = card.with_description("  details ");
        assert_eq!(card.description.as_deref(), Some("details"));
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let mut card = Card::with_id(CardId::from("k1"), "Task").with_description("details");
        let created_at = card.created_at;

        card.apply(CardUpdate::default().title("Renamed"));

        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description.as_deref(), Some("details"));
        assert_eq!(card.created_at, created_at);
        assert_eq!(card.id.as_str(), "k1");
    }

    #[test]
    fn test_apply_empty_description_clears_it() {
        let mut card = Card::new("Task").with_description("details");
        card.apply(CardUpdate::default().description(""));
        assert!(card.description.is_none());
    }

    #[test]
    fn test_card_json_field_names() {
        let card = Card::with_id(CardId::from("k1"), "Task A");
        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(value["id"], "k1");
        assert_eq!(value["title"], "Task A");
        assert!(value["description"].is_null());
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_missing_description_is_none() {
        let json = r#"{"id":"k1","title":"Task","createdAt":"2024-01-01T00:00:00Z"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "Task");
        assert!(card.description.is_none());
    }

    #[test]
    fn test_deserializes_browser_timestamps() {
        let json = r#"{
            "id": "card_1700000000000_abcdefghi",
            "title": "Old card",
            "description": "",
            "createdAt": "2024-01-01T10:00:00.000Z"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "Old card");
        assert_eq!(card.description.as_deref(), Some(""));
        assert_eq!(card.created_at.to_rfc3339(), "2024-01-01T10:00:00+00:00");
    }
}
