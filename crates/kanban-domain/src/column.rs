use serde::{Deserialize, Serialize};

use crate::card::CardId;

pub type ColumnId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            color: None,
            card_ids: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.card_ids.iter().any(|id| id == card_id)
    }

    pub fn index_of(&self, card_id: &str) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }

    /// Remove `card_id`, returning the index it occupied.
    pub fn remove_card(&mut self, card_id: &str) -> Option<usize> {
        let index = self.index_of(card_id)?;
        self.card_ids.remove(index);
        Some(index)
    }

    /// Insert at `index`, appending when the index is past the end.
    /// Returns the index actually used.
    pub fn insert_card_clamped(&mut self, card_id: CardId, index: usize) -> usize {
        let index = index.min(self.card_ids.len());
        self.card_ids.insert(index, card_id);
        index
    }
}
