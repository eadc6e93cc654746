use super::{Command, CommandContext, CommandOutcome, NoOpReason};
use crate::id::IdKind;
use crate::{Card, CardDraft, CardUpdate};
use kanban_core::KanbanResult;
use serde::{Deserialize, Serialize};

/// Create a card at the end of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCard {
    pub column_id: String,
    pub draft: CardDraft,
}

impl Command for AddCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(column_index) = context.board.column_index(&self.column_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::ColumnNotFound(
                self.column_id.clone(),
            )));
        };
        if !self.draft.has_title() {
            return Ok(CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        }

        let id = context.board.fresh_id(IdKind::Card, context.ids)?;
        let Some(card) = Card::from_draft(id.clone(), self.draft.clone()) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        };
        context.board.cards.insert(id.clone(), card);
        context.board.columns[column_index].card_ids.push(id.clone());
        Ok(CommandOutcome::Created(id))
    }

    fn description(&self) -> String {
        format!("Add card: '{}'", self.draft.title)
    }
}

/// Merge a partial update into a card's fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub card_id: String,
    pub update: CardUpdate,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(card) = context.board.cards.get_mut(&self.card_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::CardNotFound(
                self.card_id.clone(),
            )));
        };
        if self.update.has_blank_title() {
            return Ok(CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        }

        let mut updated = card.clone();
        self.update.clone().apply_to(&mut updated);
        if updated == *card {
            return Ok(CommandOutcome::Unchanged(NoOpReason::NothingToChange));
        }
        *card = updated;
        Ok(CommandOutcome::Applied)
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Delete a card and drop it from whichever column lists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCard {
    pub card_id: String,
}

impl Command for RemoveCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let in_mapping = context.board.cards.remove(&self.card_id).is_some();
        let mut listed = false;
        for column in context.board.columns.iter_mut() {
            listed |= column.remove_card(&self.card_id).is_some();
        }

        if in_mapping || listed {
            Ok(CommandOutcome::Applied)
        } else {
            Ok(CommandOutcome::Unchanged(NoOpReason::CardNotFound(
                self.card_id.clone(),
            )))
        }
    }

    fn description(&self) -> String {
        format!("Remove card {}", self.card_id)
    }
}

/// Move a card to an index in a (possibly different) column.
///
/// The card is taken out of the source list first, then `to_index` is
/// clamped to the destination length and the card inserted there. An index
/// past the end appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub card_id: String,
    pub from_column_id: String,
    pub to_column_id: String,
    pub to_index: usize,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let board = &mut *context.board;
        let Some(from) = board.column_index(&self.from_column_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::ColumnNotFound(
                self.from_column_id.clone(),
            )));
        };
        let Some(to) = board.column_index(&self.to_column_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::ColumnNotFound(
                self.to_column_id.clone(),
            )));
        };
        let Some(source_index) = board.columns[from].index_of(&self.card_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::CardNotInColumn {
                card_id: self.card_id.clone(),
                column_id: self.from_column_id.clone(),
            }));
        };

        let destination_len = if from == to {
            board.columns[to].len() - 1
        } else {
            board.columns[to].len()
        };
        if from == to && self.to_index.min(destination_len) == source_index {
            return Ok(CommandOutcome::Unchanged(NoOpReason::AlreadyInPlace));
        }

        board.columns[from].card_ids.remove(source_index);
        board.columns[to].insert_card_clamped(self.card_id.clone(), self.to_index);
        Ok(CommandOutcome::Applied)
    }

    fn description(&self) -> String {
        format!(
            "Move card {} from {} to {} at {}",
            self.card_id, self.from_column_id, self.to_column_id, self.to_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Column, FieldUpdate, SequentialIdGenerator};

    fn board(columns: &[(&str, &[&str])]) -> Board {
        let mut board = Board::new();
        for (column_id, card_ids) in columns {
            let mut column = Column::new(column_id.to_string(), column_id.to_string());
            for card_id in *card_ids {
                column.card_ids.push(card_id.to_string());
                board.cards.insert(
                    card_id.to_string(),
                    Card::from_draft(card_id.to_string(), CardDraft::new(*card_id)).unwrap(),
                );
            }
            board.columns.push(column);
        }
        board
    }

    fn ids_of<'a>(board: &'a Board, column_id: &str) -> Vec<&'a str> {
        board
            .column(column_id)
            .unwrap()
            .card_ids
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn run(command: &dyn Command, board: &Board) -> (Board, CommandOutcome) {
        command
            .apply(board, &mut SequentialIdGenerator::new())
            .unwrap()
    }

    fn move_card(card: &str, from: &str, to: &str, index: usize) -> MoveCard {
        MoveCard {
            card_id: card.into(),
            from_column_id: from.into(),
            to_column_id: to.into(),
            to_index: index,
        }
    }

    #[test]
    fn test_add_card_to_empty_column() {
        let start = board(&[("todo", &[]), ("done", &[])]);
        let command = AddCard {
            column_id: "todo".into(),
            draft: CardDraft::new("Write spec"),
        };
        let (next, outcome) = run(&command, &start);

        let new_id = outcome.created_id().unwrap().to_string();
        assert!(!start.contains_card(&new_id));
        assert_eq!(ids_of(&next, "todo"), vec![new_id.as_str()]);
        assert_eq!(next.card_count(), 1);
        assert_eq!(next.card(&new_id).unwrap().title, "Write spec");
    }

    #[test]
    fn test_add_card_appends_to_end() {
        let start = board(&[("todo", &["c1", "c2"])]);
        let command = AddCard {
            column_id: "todo".into(),
            draft: CardDraft::new("Third"),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(ids_of(&next, "todo")[2], outcome.created_id().unwrap());
    }

    #[test]
    fn test_add_card_to_unknown_column_is_noop() {
        let start = board(&[("todo", &[])]);
        let command = AddCard {
            column_id: "nope".into(),
            draft: CardDraft::new("Orphan"),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::ColumnNotFound("nope".into()))
        );
        assert_eq!(next, start);
    }

    #[test]
    fn test_add_card_with_blank_title_is_noop() {
        let start = board(&[("todo", &[])]);
        let command = AddCard {
            column_id: "todo".into(),
            draft: CardDraft::new("   "),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(outcome, CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        assert_eq!(next, start);
    }

    #[test]
    fn test_update_card_merges_fields_without_moving() {
        let start = board(&[("todo", &["c1", "c2"])]);
        let command = UpdateCard {
            card_id: "c2".into(),
            update: CardUpdate {
                description: FieldUpdate::Set("More detail".into()),
                ..CardUpdate::default()
            },
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(outcome, CommandOutcome::Applied);
        let card = next.card("c2").unwrap();
        assert_eq!(card.title, "c2");
        assert_eq!(card.description.as_deref(), Some("More detail"));
        assert_eq!(ids_of(&next, "todo"), vec!["c1", "c2"]);
    }

    #[test]
    fn test_update_card_rejects_blank_title() {
        let start = board(&[("todo", &["c1"])]);
        let command = UpdateCard {
            card_id: "c1".into(),
            update: CardUpdate::title(" "),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(outcome, CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        assert_eq!(next, start);
    }

    #[test]
    fn test_update_unknown_card_is_noop() {
        let start = board(&[("todo", &["c1"])]);
        let command = UpdateCard {
            card_id: "ghost".into(),
            update: CardUpdate::title("New"),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::CardNotFound("ghost".into()))
        );
        assert_eq!(next, start);
    }

    #[test]
    fn test_update_with_same_values_reports_nothing_to_change() {
        let start = board(&[("todo", &["c1"])]);
        let command = UpdateCard {
            card_id: "c1".into(),
            update: CardUpdate::title("c1"),
        };
        let (_, outcome) = run(&command, &start);
        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::NothingToChange)
        );
    }

    #[test]
    fn test_remove_card_cleans_column() {
        let start = board(&[("todo", &["c1", "c2"]), ("done", &["c3"])]);
        let command = RemoveCard {
            card_id: "c1".into(),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(outcome, CommandOutcome::Applied);
        assert!(!next.contains_card("c1"));
        assert_eq!(ids_of(&next, "todo"), vec!["c2"]);
        assert_eq!(ids_of(&next, "done"), vec!["c3"]);
    }

    #[test]
    fn test_remove_unknown_card_is_noop() {
        let start = board(&[("todo", &["c1"])]);
        let command = RemoveCard {
            card_id: "missing".into(),
        };
        let (next, outcome) = run(&command, &start);

        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::CardNotFound("missing".into()))
        );
        assert_eq!(next, start);
    }

    #[test]
    fn test_move_across_columns() {
        let start = board(&[("todo", &["c1", "c2"]), ("done", &[])]);
        let (next, outcome) = run(&move_card("c1", "todo", "done", 0), &start);

        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(ids_of(&next, "todo"), vec!["c2"]);
        assert_eq!(ids_of(&next, "done"), vec!["c1"]);
    }

    #[test]
    fn test_move_within_column_reorders() {
        let start = board(&[("todo", &["a", "b", "c", "d"])]);

        let (next, _) = run(&move_card("a", "todo", "todo", 2), &start);
        assert_eq!(ids_of(&next, "todo"), vec!["b", "c", "a", "d"]);

        let (next, _) = run(&move_card("d", "todo", "todo", 0), &start);
        assert_eq!(ids_of(&next, "todo"), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_move_far_past_end_equals_append() {
        let start = board(&[("todo", &["a", "b"]), ("done", &["x", "y"])]);

        let (far, _) = run(&move_card("a", "todo", "done", 10_000), &start);
        let (end, _) = run(&move_card("a", "todo", "done", 2), &start);
        assert_eq!(far, end);
        assert_eq!(ids_of(&far, "done"), vec!["x", "y", "a"]);

        let (far, _) = run(&move_card("a", "todo", "todo", usize::MAX), &start);
        assert_eq!(ids_of(&far, "todo"), vec!["b", "a"]);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let start = board(&[("todo", &["a", "b"])]);

        let (next, outcome) = run(&move_card("b", "todo", "todo", 1), &start);
        assert_eq!(outcome, CommandOutcome::Unchanged(NoOpReason::AlreadyInPlace));
        assert_eq!(next, start);

        let (_, outcome) = run(&move_card("b", "todo", "todo", 99), &start);
        assert_eq!(outcome, CommandOutcome::Unchanged(NoOpReason::AlreadyInPlace));
    }

    #[test]
    fn test_move_with_stale_source_is_noop() {
        let start = board(&[("todo", &["c1"]), ("done", &["c2"])]);

        let (next, outcome) = run(&move_card("c2", "todo", "done", 0), &start);
        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::CardNotInColumn {
                card_id: "c2".into(),
                column_id: "todo".into(),
            })
        );
        assert_eq!(next, start);

        let (next, outcome) = run(&move_card("c1", "todo", "deleted", 0), &start);
        assert_eq!(
            outcome,
            CommandOutcome::Unchanged(NoOpReason::ColumnNotFound("deleted".into()))
        );
        assert_eq!(next, start);
    }

    #[test]
    fn test_every_noop_returns_the_input_board() {
        let start = board(&[("todo", &["c1", "c2"]), ("done", &[])]);
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(AddCard {
                column_id: "nope".into(),
                draft: CardDraft::new("Lost"),
            }),
            Box::new(AddCard {
                column_id: "todo".into(),
                draft: CardDraft::new("  "),
            }),
            Box::new(UpdateCard {
                card_id: "c1".into(),
                update: CardUpdate::title(" "),
            }),
            Box::new(UpdateCard {
                card_id: "c1".into(),
                update: CardUpdate::default(),
            }),
            Box::new(RemoveCard {
                card_id: "ghost".into(),
            }),
            Box::new(move_card("c1", "todo", "todo", 0)),
            Box::new(move_card("c1", "done", "todo", 0)),
        ];

        for command in &commands {
            let (next, outcome) = run(command.as_ref(), &start);
            assert!(!outcome.is_change(), "{}", command.description());
            assert_eq!(next, start, "{}", command.description());
        }
    }

    #[test]
    fn test_move_payload_wire_names() {
        let payload: MoveCard = serde_json::from_str(
            r#"{"cardId": "c1", "fromColumnId": "todo", "toColumnId": "done", "toIndex": 3}"#,
        )
        .unwrap();
        assert_eq!(payload, move_card("c1", "todo", "done", 3));
    }
}
