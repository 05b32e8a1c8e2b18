use crate::domain::{
    card::{Card, CardUpdate},
    column::Column,
    id::{BoardId, CardId, ColumnId},
    ordering::{move_within, reorder_by_key},
};
use crate::error::{CardAction, KanbanError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kanban board: a named, ordered list of columns
///
/// Mutations return `Ok(false)` when a referenced column or card does not
/// exist, leaving the board unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a new board with a generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(BoardId::generate(), name)
    }

    /// Creates a new board with a caller-chosen ID
    pub fn with_id(id: BoardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            columns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == id)
    }

    /// Finds a card anywhere on the board
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.columns.iter().find_map(|col| col.find_card(id))
    }

    /// Returns the column currently holding the card
    pub fn column_of(&self, card_id: &CardId) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|col| col.find_card(card_id).is_some())
            .map(|col| &col.id)
    }

    /// Appends a column
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.find_column(&column.id).is_some() {
            return Err(KanbanError::DuplicateId {
                kind: "column",
                id: column.id.to_string(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Changes a column's title and WiP limit
    ///
    /// A limit below the current card count is accepted; it only constrains
    /// future additions and moves.
    pub fn update_column(
        &mut self,
        column_id: &ColumnId,
        title: String,
        wip_limit: Option<u32>,
    ) -> bool {
        match self.find_column_mut(column_id) {
            Some(column) => {
                column.title = title;
                column.set_wip_limit(wip_limit);
                true
            }
            None => false,
        }
    }

    /// Removes a column together with its cards
    pub fn remove_column(&mut self, column_id: &ColumnId) -> bool {
        let before = self.columns.len();
        self.columns.retain(|col| &col.id != column_id);
        self.columns.len() != before
    }

    pub fn reorder_columns(&mut self, order: &[ColumnId]) -> bool {
        reorder_by_key(&mut self.columns, order, |col| &col.id)
    }

    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        move_within(&mut self.columns, from, to)
    }

    /// Appends a card to a column, respecting its WiP limit
    pub fn add_card(&mut self, column_id: &ColumnId, card: Card) -> Result<bool> {
        if self.find_card(&card.id).is_some() {
            return Err(KanbanError::DuplicateId {
                kind: "card",
                id: card.id.to_string(),
            });
        }

        let Some(column) = self.find_column_mut(column_id) else {
            return Ok(false);
        };

        if !column.has_room_for(1) {
            return Err(wip_exceeded(CardAction::Add, column));
        }

        column.cards.push(card);
        Ok(true)
    }

    pub fn update_card(
        &mut self,
        column_id: &ColumnId,
        card_id: &CardId,
        update: CardUpdate,
    ) -> bool {
        match self
            .find_column_mut(column_id)
            .and_then(|col| col.find_card_mut(card_id))
        {
            Some(card) => {
                card.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn remove_card(&mut self, column_id: &ColumnId, card_id: &CardId) -> bool {
        let Some(column) = self.find_column_mut(column_id) else {
            return false;
        };
        let before = column.cards.len();
        column.cards.retain(|card| &card.id != card_id);
        column.cards.len() != before
    }

    /// Moves a card to `index` in the destination column (`None` appends)
    ///
    /// A move to a different column is rejected when the destination would
    /// end up above its WiP limit. Moves within one column never are, since
    /// its card count does not change.
    pub fn move_card(
        &mut self,
        from: &ColumnId,
        to: &ColumnId,
        card_id: &CardId,
        index: Option<usize>,
    ) -> Result<bool> {
        let Some(from_idx) = self.columns.iter().position(|col| &col.id == from) else {
            return Ok(false);
        };
        let Some(to_idx) = self.columns.iter().position(|col| &col.id == to) else {
            return Ok(false);
        };
        let Some(card_idx) = self.columns[from_idx].card_position(card_id) else {
            return Ok(false);
        };

        if from_idx == to_idx {
            let cards = &mut self.columns[from_idx].cards;
            let to = index.unwrap_or(cards.len());
            return Ok(move_within(cards, card_idx, to));
        }

        let destination = &self.columns[to_idx];
        if !destination.has_room_for(1) {
            return Err(wip_exceeded(CardAction::Move, destination));
        }

        let card = self.columns[from_idx].cards.remove(card_idx);
        let cards = &mut self.columns[to_idx].cards;
        let at = index.unwrap_or(cards.len()).min(cards.len());
        cards.insert(at, card);
        Ok(true)
    }

    pub fn reorder_cards(&mut self, column_id: &ColumnId, order: &[CardId]) -> bool {
        match self.find_column_mut(column_id) {
            Some(column) => reorder_by_key(&mut column.cards, order, |card| &card.id),
            None => false,
        }
    }
}

fn wip_exceeded(action: CardAction, column: &Column) -> KanbanError {
    KanbanError::WipLimitExceeded {
        action,
        column: column.title.clone(),
        limit: column.wip_limit.unwrap_or_default(),
    }
}
