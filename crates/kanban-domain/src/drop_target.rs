//! Translating a finished drag gesture into a [`MoveCard`].
//!
//! The UI reports what the dragged card was released over; this module
//! decides the destination column and index against the current board.

use crate::commands::MoveCard;
use crate::Board;
use serde::{Deserialize, Serialize};

/// The card being dragged and the column it was picked up from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSource {
    pub card_id: String,
    pub column_id: String,
}

/// What the card was dropped on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DropTarget {
    /// Another card, shown in `column_id`.
    #[serde(rename_all = "camelCase")]
    Card { card_id: String, column_id: String },
    /// The empty area of a column.
    #[serde(rename_all = "camelCase")]
    Column { column_id: String },
    /// An element the UI could not classify; only its id is known.
    Unknown { id: String },
}

/// Resolve a drop into a move.
///
/// - over a card: that card's current index in its column, or the column's
///   length if the card is no longer there
/// - over a column: the end of that column
/// - otherwise: the end of the first column that lists the id or has it as
///   its own id; when nothing matches the card goes to the top of its
///   source column
///
/// Returns `None` when the source column is gone or no longer lists the
/// dragged card.
pub fn resolve_drop(board: &Board, source: &DragSource, target: &DropTarget) -> Option<MoveCard> {
    let source_column = board.column(&source.column_id)?;
    source_column.index_of(&source.card_id)?;

    let (to_column_id, to_index) = match target {
        DropTarget::Card { card_id, column_id } => {
            let index = board
                .column(column_id)
                .map(|column| column.index_of(card_id).unwrap_or(column.len()))
                .unwrap_or(0);
            (column_id.clone(), index)
        }
        DropTarget::Column { column_id } => {
            let index = board.column(column_id).map_or(0, |column| column.len());
            (column_id.clone(), index)
        }
        DropTarget::Unknown { id } => board
            .columns
            .iter()
            .find(|column| column.contains(id) || column.id == *id)
            .map(|column| (column.id.clone(), column.len()))
            .unwrap_or_else(|| (source.column_id.clone(), 0)),
    };

    Some(MoveCard {
        card_id: source.card_id.clone(),
        from_column_id: source.column_id.clone(),
        to_column_id,
        to_index,
    })
}
