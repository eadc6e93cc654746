use crate::Board;
use kanban_core::{KanbanError, KanbanResult};
use serde_json::error::Category;
use std::collections::HashSet;

pub struct BoardImporter;

impl BoardImporter {
    /// Parse and validate board text.
    ///
    /// Blank input, text with the wrong shape, and a card mapping that repeats
    /// a key are `Validation` errors; text that is not JSON at all is a
    /// `Serialization` error. A parsed board
    /// must also be referentially sound (see [`BoardImporter::validate`]).
    pub fn import_from_json(text: &str) -> KanbanResult<Board> {
        if text.trim().is_empty() {
            return Err(KanbanError::Validation("import text is empty".to_string()));
        }

        let board: Board = serde_json::from_str(text).map_err(|err| match err.classify() {
            Category::Data => KanbanError::Validation(format!(
                "Expected {{\"columns\": [...], \"cards\": {{...}}}} structure. Error: {}",
                err
            )),
            Category::Syntax | Category::Eof | Category::Io => {
                KanbanError::Serialization(format!("Invalid JSON format: {}", err))
            }
        })?;

        Self::validate(&board)?;
        Ok(board)
    }

    /// Check the referential invariants the mutation engine relies on.
    ///
    /// Rejects duplicate column ids, columns listing unknown cards, cards
    /// listed more than once, mapping keys that differ from the card's own
    /// id, and blank card titles. Cards listed by no column are accepted.
    pub fn validate(board: &Board) -> KanbanResult<()> {
        let mut column_ids = HashSet::new();
        let mut listed = HashSet::new();

        for column in &board.columns {
            if !column_ids.insert(column.id.as_str()) {
                return Err(KanbanError::Validation(format!(
                    "duplicate column id: {}",
                    column.id
                )));
            }
            for card_id in &column.card_ids {
                if !board.cards.contains_key(card_id) {
                    return Err(KanbanError::Validation(format!(
                        "column {} lists unknown card {}",
                        column.id, card_id
                    )));
                }
                if !listed.insert(card_id.as_str()) {
                    return Err(KanbanError::Validation(format!(
                        "card {} is listed more than once",
                        card_id
                    )));
                }
            }
        }

        for (key, card) in &board.cards {
            if *key != card.id {
                return Err(KanbanError::Validation(format!(
                    "card stored under {} has id {}",
                    key, card.id
                )));
            }
            if card.title.trim().is_empty() {
                return Err(KanbanError::Validation(format!(
                    "card {} has an empty title",
                    card.id
                )));
            }
        }

        Ok(())
    }
}
