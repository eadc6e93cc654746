use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::id::{self, IdGenerator, IdKind};
use kanban_core::KanbanResult;

/// Complete editor state: ordered columns plus the card mapping.
///
/// Card membership and order live only in [`Column::card_ids`]; the mapping
/// is keyed by card id and kept sorted so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    #[serde(deserialize_with = "unique_cards")]
    pub cards: BTreeMap<CardId, Card>,
}

/// Read the card mapping, rejecting keys that appear more than once.
fn unique_cards<'de, D>(deserializer: D) -> Result<BTreeMap<CardId, Card>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueCards;

    impl<'de> Visitor<'de> for UniqueCards {
        type Value = BTreeMap<CardId, Card>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of card id to card")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut cards = BTreeMap::new();
            while let Some((id, card)) = map.next_entry::<CardId, Card>()? {
                if cards.contains_key(&id) {
                    return Err(de::Error::custom(format!("duplicate card id: {}", id)));
                }
                cards.insert(id, card);
            }
            Ok(cards)
        }
    }

    deserializer.deserialize_map(UniqueCards)
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            cards: BTreeMap::new(),
        }
    }

    /// Starter board with one empty column per title.
    pub fn seeded<S: AsRef<str>>(titles: &[S], ids: &mut dyn IdGenerator) -> KanbanResult<Self> {
        let mut board = Self::new();
        for title in titles {
            let id = board.fresh_id(IdKind::Column, ids)?;
            board
                .columns
                .push(Column::new(id, title.as_ref().trim().to_string()));
        }
        Ok(board)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    pub fn contains_column(&self, column_id: &str) -> bool {
        self.column_index(column_id).is_some()
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.get(card_id)
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.cards.contains_key(card_id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The column currently listing `card_id`.
    pub fn column_of(&self, card_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(card_id))
    }

    /// `(column id, index)` of a card.
    pub fn position_of(&self, card_id: &str) -> Option<(&ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|c| c.index_of(card_id).map(|index| (&c.id, index)))
    }

    /// Cards of a column in display order. Ids with no card entry are skipped.
    pub fn cards_in(&self, column_id: &str) -> Vec<&Card> {
        self.column(column_id)
            .map(|column| {
                column
                    .card_ids
                    .iter()
                    .filter_map(|id| self.cards.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cards present in the mapping but listed by no column.
    pub fn orphaned_cards(&self) -> Vec<&CardId> {
        self.cards
            .keys()
            .filter(|id| self.column_of(id).is_none())
            .collect()
    }

    fn is_id_taken(&self, candidate: &str) -> bool {
        self.contains_column(candidate)
            || self.contains_card(candidate)
            || self.column_of(candidate).is_some()
    }

    /// Tell `ids` about every id this board already uses.
    pub fn reserve_ids(&self, ids: &mut dyn IdGenerator) {
        for column in &self.columns {
            ids.reserve(&column.id);
            for card_id in &column.card_ids {
                ids.reserve(card_id);
            }
        }
        for card_id in self.cards.keys() {
            ids.reserve(card_id);
        }
    }

    /// Allocate an id that no column or card on this board uses.
    pub fn fresh_id(&self, kind: IdKind, ids: &mut dyn IdGenerator) -> KanbanResult<String> {
        id::allocate(ids, kind, |candidate| self.is_id_taken(candidate))
    }
}
