//! Board export functionality.

use crate::Board;
use kanban_core::{KanbanError, KanbanResult};

/// Exports a board to its portable text form.
pub struct BoardExporter;

impl BoardExporter {
    /// Serialize to pretty-printed JSON.
    ///
    /// Columns keep board order and cards are written in id order, so the
    /// same board always produces the same text.
    pub fn export_to_json(board: &Board) -> KanbanResult<String> {
        serde_json::to_string_pretty(board).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}
