use super::{Command, CommandContext, CommandOutcome, NoOpReason};
use crate::id::IdKind;
use crate::Column;
use kanban_core::KanbanResult;
use serde::{Deserialize, Serialize};

/// Append a new, empty column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddColumn {
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl AddColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }
}

impl Command for AddColumn {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let title = self.title.trim();
        if title.is_empty() {
            return Ok(CommandOutcome::Unchanged(NoOpReason::EmptyTitle));
        }
        let id = context.board.fresh_id(IdKind::Column, context.ids)?;
        let color = self.color.clone().filter(|c| !c.trim().is_empty());
        context
            .board
            .columns
            .push(Column::new(id.clone(), title.to_string()).with_color(color));
        Ok(CommandOutcome::Created(id))
    }

    fn description(&self) -> String {
        format!("Add column: '{}'", self.title)
    }
}

/// Delete a column together with every card it lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveColumn {
    pub column_id: String,
}

impl Command for RemoveColumn {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(index) = context.board.column_index(&self.column_id) else {
            return Ok(CommandOutcome::Unchanged(NoOpReason::ColumnNotFound(
                self.column_id.clone(),
            )));
        };
        let column = context.board.columns.remove(index);
        for card_id in &column.card_ids {
            context.board.cards.remove(card_id);
        }
        Ok(CommandOutcome::Applied)
    }

    fn description(&self) -> String {
        format!("Remove column {}", self.column_id)
    }
}
