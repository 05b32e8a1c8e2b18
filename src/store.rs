//! The board store: canonical, ordered collection of boards.
//!
//! Every mutation is one read-modify-write of the whole collection: the
//! current boards are cloned, the clone is changed, the full clone is saved
//! to the storage slot, and only then does it replace the in-memory state.
//! A failed save therefore leaves the store exactly as it was.
//!
//! Mutations report `Ok(false)` when a board, column or card they refer to
//! does not exist. Nothing is written in that case.

use crate::{
    domain::{Board, BoardId, Card, CardId, CardUpdate, Column, ColumnId, WipStatus},
    error::{KanbanError, Result},
    storage::Storage,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub struct BoardStore<S> {
    storage: S,
    boards: Vec<Board>,
}

impl<S: Storage> BoardStore<S> {
    /// Opens the store, loading whatever the slot holds
    ///
    /// An empty slot or malformed contents give an empty store; I/O
    /// failures are returned.
    pub async fn open(storage: S) -> Result<Self> {
        storage.initialize().await?;
        if !storage.is_initialized().await {
            debug!("slot has never been written, starting fresh");
        }
        let boards = load_or_empty(&storage).await?;
        debug!(boards = boards.len(), "board store opened");
        Ok(Self { storage, boards })
    }

    /// Re-reads the slot, discarding the in-memory state
    pub async fn reload(&mut self) -> Result<()> {
        self.boards = load_or_empty(&self.storage).await?;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All boards in display order
    pub fn list(&self) -> &[Board] {
        &self.boards
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Overwrites the whole collection
    ///
    /// Column and card IDs must be unique across all of `boards`.
    pub async fn replace_all(&mut self, boards: Vec<Board>) -> Result<()> {
        ensure_unique_ids(std::iter::empty::<&Board>(), &boards)?;
        self.commit(boards).await
    }

    // Boards

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| &board.id == id)
    }

    /// Creates a board with a generated ID and appends it
    pub async fn create_board(&mut self, name: &str) -> Result<Board> {
        let board = Board::new(required_title("Board", name)?);
        self.upsert_board(board.clone()).await?;
        Ok(board)
    }

    /// Inserts a board, or replaces the one with the same ID in place
    ///
    /// Rejects a board reusing a column or card ID owned by another board.
    pub async fn upsert_board(&mut self, board: Board) -> Result<()> {
        ensure_unique_ids(
            self.boards.iter().filter(|existing| existing.id != board.id),
            std::slice::from_ref(&board),
        )?;

        let mut next = self.boards.clone();
        match next.iter().position(|existing| existing.id == board.id) {
            Some(index) => next[index] = board,
            None => next.push(board),
        }
        self.commit(next).await
    }

    pub async fn rename_board(&mut self, id: &BoardId, name: &str) -> Result<bool> {
        let name = required_title("Board", name)?;
        self.mutate_board(id, |board| {
            board.name = name;
            Ok(true)
        })
        .await
    }

    /// Deletes a board with all of its columns and cards
    pub async fn delete_board(&mut self, id: &BoardId) -> Result<bool> {
        if self.board(id).is_none() {
            return Ok(false);
        }

        let next = self
            .boards
            .iter()
            .filter(|board| &board.id != id)
            .cloned()
            .collect();
        self.commit(next).await?;
        Ok(true)
    }

    // Columns

    pub fn column(&self, board_id: &BoardId, column_id: &ColumnId) -> Option<&Column> {
        self.board(board_id)
            .and_then(|board| board.find_column(column_id))
    }

    /// Card count and limit of a column, for the WiP counter
    pub fn wip_status(&self, board_id: &BoardId, column_id: &ColumnId) -> Option<WipStatus> {
        self.column(board_id, column_id).map(Column::wip_status)
    }

    /// Appends a column to a board
    pub async fn add_column(&mut self, board_id: &BoardId, mut column: Column) -> Result<bool> {
        column.title = required_title("Column", &column.title)?;

        if self
            .boards
            .iter()
            .any(|board| board.find_column(&column.id).is_some())
        {
            return Err(KanbanError::DuplicateId {
                kind: "column",
                id: column.id.to_string(),
            });
        }

        self.mutate_board(board_id, |board| {
            board.add_column(column)?;
            Ok(true)
        })
        .await
    }

    pub async fn update_column(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        title: &str,
        wip_limit: Option<u32>,
    ) -> Result<bool> {
        let title = required_title("Column", title)?;
        self.mutate_board(board_id, |board| {
            Ok(board.update_column(column_id, title, wip_limit))
        })
        .await
    }

    /// Deletes a column and the cards in it
    pub async fn delete_column(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| Ok(board.remove_column(column_id)))
            .await
    }

    /// Puts a board's columns in the given order
    ///
    /// `order` must list every column of the board exactly once.
    pub async fn reorder_columns(
        &mut self,
        board_id: &BoardId,
        order: &[ColumnId],
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| Ok(board.reorder_columns(order)))
            .await
    }

    pub async fn move_column(
        &mut self,
        board_id: &BoardId,
        from: usize,
        to: usize,
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| Ok(board.move_column(from, to)))
            .await
    }

    // Cards

    pub fn card(&self, board_id: &BoardId, card_id: &CardId) -> Option<&Card> {
        self.board(board_id).and_then(|board| board.find_card(card_id))
    }

    /// Column currently holding a card
    pub fn locate_card(&self, board_id: &BoardId, card_id: &CardId) -> Option<&ColumnId> {
        self.board(board_id)
            .and_then(|board| board.column_of(card_id))
    }

    /// Appends a card to a column unless that would break its WiP limit
    pub async fn add_card(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        mut card: Card,
    ) -> Result<bool> {
        card.title = required_title("Card", &card.title)?;

        if self
            .boards
            .iter()
            .any(|board| board.find_card(&card.id).is_some())
        {
            return Err(KanbanError::DuplicateId {
                kind: "card",
                id: card.id.to_string(),
            });
        }

        self.mutate_board(board_id, |board| board.add_card(column_id, card))
            .await
    }

    pub async fn update_card(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        card_id: &CardId,
        mut update: CardUpdate,
    ) -> Result<bool> {
        if let Some(title) = update.title.take() {
            update.title = Some(required_title("Card", &title)?);
        }

        self.mutate_board(board_id, |board| {
            Ok(board.update_card(column_id, card_id, update))
        })
        .await
    }

    pub async fn delete_card(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        card_id: &CardId,
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| Ok(board.remove_card(column_id, card_id)))
            .await
    }

    /// Moves a card to the end of another column (or of the same one)
    ///
    /// Fails with [`KanbanError::WipLimitExceeded`] when the destination is a
    /// different column that is already at its limit.
    pub async fn move_card(
        &mut self,
        board_id: &BoardId,
        from: &ColumnId,
        to: &ColumnId,
        card_id: &CardId,
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| board.move_card(from, to, card_id, None))
            .await
    }

    /// Same as [`move_card`](Self::move_card), dropping the card at `index`
    pub async fn move_card_to(
        &mut self,
        board_id: &BoardId,
        from: &ColumnId,
        to: &ColumnId,
        card_id: &CardId,
        index: usize,
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| {
            board.move_card(from, to, card_id, Some(index))
        })
        .await
    }

    /// Puts a column's cards in the given order
    pub async fn reorder_cards(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        order: &[CardId],
    ) -> Result<bool> {
        self.mutate_board(board_id, |board| Ok(board.reorder_cards(column_id, order)))
            .await
    }

    async fn mutate_board<F>(&mut self, board_id: &BoardId, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut Board) -> Result<bool>,
    {
        let mut next = self.boards.clone();
        let Some(board) = next.iter_mut().find(|board| &board.id == board_id) else {
            debug!(board = %board_id, "board not found");
            return Ok(false);
        };

        match mutate(board) {
            Ok(true) => {}
            Ok(false) => return Ok(false),
            Err(err) => {
                if err.is_rejection() {
                    info!(board = %board_id, "{}", err);
                }
                return Err(err);
            }
        }

        self.commit(next).await?;
        Ok(true)
    }

    async fn commit(&mut self, boards: Vec<Board>) -> Result<()> {
        self.storage.save_boards(&boards).await?;
        debug!(boards = boards.len(), "boards saved");
        self.boards = boards;
        Ok(())
    }
}

async fn load_or_empty<S: Storage>(storage: &S) -> Result<Vec<Board>> {
    match storage.load_boards().await {
        Ok(boards) => Ok(boards),
        Err(KanbanError::SerializationError(err)) => {
            warn!(error = %err, "stored boards are malformed, starting empty");
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

/// Checks that no column or card of `incoming` repeats an ID already seen
/// in `existing` or earlier in `incoming`
fn ensure_unique_ids<'a>(
    existing: impl IntoIterator<Item = &'a Board>,
    incoming: &'a [Board],
) -> Result<()> {
    let mut columns: HashSet<&ColumnId> = HashSet::new();
    let mut cards: HashSet<&CardId> = HashSet::new();

    for board in existing {
        for column in &board.columns {
            columns.insert(&column.id);
            cards.extend(column.cards.iter().map(|card| &card.id));
        }
    }

    for board in incoming {
        for column in &board.columns {
            if !columns.insert(&column.id) {
                return Err(KanbanError::DuplicateId {
                    kind: "column",
                    id: column.id.to_string(),
                });
            }
            for card in &column.cards {
                if !cards.insert(&card.id) {
                    return Err(KanbanError::DuplicateId {
                        kind: "card",
                        id: card.id.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn required_title(kind: &'static str, title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::EmptyTitle(kind));
    }
    Ok(trimmed.to_string())
}
