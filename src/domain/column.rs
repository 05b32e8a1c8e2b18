use crate::domain::{
    card::Card,
    id::{CardId, ColumnId},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named, ordered list of cards, optionally capped by a WiP limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_wip_limit")]
    pub wip_limit: Option<u32>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates a new column with a generated ID
    pub fn new(title: impl Into<String>, wip_limit: Option<u32>) -> Self {
        Self::with_id(ColumnId::generate(), title, wip_limit)
    }

    /// Creates a new column with a caller-chosen ID
    pub fn with_id(id: ColumnId, title: impl Into<String>, wip_limit: Option<u32>) -> Self {
        Self {
            id,
            title: title.into(),
            wip_limit: normalize_wip_limit(wip_limit),
            cards: Vec::new(),
        }
    }

    /// Sets the WiP limit; zero means unbounded
    pub fn set_wip_limit(&mut self, wip_limit: Option<u32>) {
        self.wip_limit = normalize_wip_limit(wip_limit);
    }

    /// Whether `incoming` more cards fit without exceeding the limit
    pub fn has_room_for(&self, incoming: usize) -> bool {
        match self.wip_limit {
            Some(limit) => self.cards.len() + incoming <= limit as usize,
            None => true,
        }
    }

    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    pub fn card_position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    /// Current WiP counter for display
    pub fn wip_status(&self) -> WipStatus {
        WipStatus {
            count: self.cards.len(),
            limit: self.wip_limit,
        }
    }
}

/// Card count of a column against its WiP limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WipStatus {
    pub count: usize,
    pub limit: Option<u32>,
}

impl WipStatus {
    /// A column is at its limit once the count reaches it
    pub fn limit_reached(&self) -> bool {
        self.limit
            .map(|limit| self.count >= limit as usize)
            .unwrap_or(false)
    }
}

impl fmt::Display for WipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            Some(limit) => write!(f, "{}/{}", self.count, limit),
            None => write!(f, "{}", self.count),
        }
    }
}

fn normalize_wip_limit(wip_limit: Option<u32>) -> Option<u32> {
    wip_limit.filter(|limit| *limit > 0)
}

// Persisted data may carry 0, negative or null limits; all of them mean "no limit".
fn deserialize_wip_limit<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|limit| *limit > 0)
        .map(|limit| u32::try_from(limit).unwrap_or(u32::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_with_cards(limit: Option<u32>, count: usize) -> Column {
        let mut column = Column::with_id(ColumnId::from("c1"), "Todo", limit);
        for i in 0..count {
            column
                .cards
                .push(Card::with_id(CardId::from(format!("k{}", i)), "Task"));
        }
        column
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let column = Column::new("Todo", Some(0));
        assert_eq!(column.wip_limit, None);

        let mut column = Column::new("Todo", Some(3));
        column.set_wip_limit(Some(0));
        assert_eq!(column.wip_limit, None);
    }

    #[test]
    fn test_has_room_for() {
        let column = column_with_cards(Some(2), 1);
        assert!(column.has_room_for(1));
        assert!(!column.has_room_for(2));

        let full = column_with_cards(Some(2), 2);
        assert!(!full.has_room_for(1));
        assert!(full.has_room_for(0));

        let unbounded = column_with_cards(None, 50);
        assert!(unbounded.has_room_for(1));
    }

    #[test]
    fn test_wip_status_display() {
        assert_eq!(column_with_cards(Some(5), 3).wip_status().to_string(), "3/5");
        assert_eq!(column_with_cards(None, 3).wip_status().to_string(), "3");
    }

    #[test]
    fn test_wip_status_limit_reached() {
        assert!(!column_with_cards(Some(2), 1).wip_status().limit_reached());
        assert!(column_with_cards(Some(2), 2).wip_status().limit_reached());
        assert!(column_with_cards(Some(2), 3).wip_status().limit_reached());
        assert!(!column_with_cards(None, 10).wip_status().limit_reached());
    }

    #[test]
    fn test_card_lookup() {
        let column = column_with_cards(None, 3);
        assert_eq!(column.card_position(&CardId::from("k2")), Some(2));
        assert!(column.find_card(&CardId::from("k1")).is_some());
        assert!(column.find_card(&CardId::from("missing")).is_none());
    }

    #[test]
    fn test_lenient_wip_limit_deserialization() {
        let parse = |limit: &str| -> Option<u32> {
            let json = format!(r#"{{"id":"c1","title":"Todo","wipLimit":{},"cards":[]}}"#, limit);
            serde_json::from_str::<Column>(&json).unwrap().wip_limit
        };

        assert_eq!(parse("3"), Some(3));
        assert_eq!(parse("0"), None);
        assert_eq!(parse("-4"), None);
        assert_eq!(parse("null"), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let column: Column = serde_json::from_str(r#"{"id":"c1","title":"Todo"}"#).unwrap();
        assert_eq!(column.wip_limit, None);
        assert!(column.cards.is_empty());
    }

    #[test]
    fn test_column_json_field_names() {
        let value = serde_json::to_value(Column::with_id(ColumnId::from("c1"), "Todo", Some(4)))
            .unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["title"], "Todo");
        assert_eq!(value["wipLimit"], 4);
        assert!(value["cards"].as_array().unwrap().is_empty());
    }
}
