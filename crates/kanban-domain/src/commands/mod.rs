use crate::id::IdGenerator;
use crate::Board;
use kanban_core::KanbanResult;
use std::fmt;

pub mod card_commands;
pub mod column_commands;

pub use card_commands::*;
pub use column_commands::*;

/// Trait for domain commands that mutate state
/// Commands represent intent and can be executed, queued, and persisted
pub trait Command: Send + Sync {
    /// Execute this command against the board held by `context`.
    ///
    /// Implementations validate before touching the board: an `Unchanged`
    /// outcome guarantees the board was not modified.
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;

    /// Run the command on a copy of `board` and return the resulting board.
    ///
    /// The input is never modified. On `Unchanged` the returned board equals
    /// the input; on error the caller keeps its original board.
    fn apply(
        &self,
        board: &Board,
        ids: &mut dyn IdGenerator,
    ) -> KanbanResult<(Board, CommandOutcome)> {
        let mut working = board.clone();
        let outcome = self.execute(&mut CommandContext {
            board: &mut working,
            ids,
        })?;
        Ok((working, outcome))
    }
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub board: &'a mut Board,
    pub ids: &'a mut dyn IdGenerator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// A column or card was created with this id.
    Created(String),
    Unchanged(NoOpReason),
}

impl CommandOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, CommandOutcome::Unchanged(_))
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            CommandOutcome::Created(id) => Some(id),
            _ => None,
        }
    }

    pub fn no_op_reason(&self) -> Option<&NoOpReason> {
        match self {
            CommandOutcome::Unchanged(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Why a command left the board as it was.
///
/// Stale references from the UI are expected during rapid interaction, so
/// these are outcomes rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    EmptyTitle,
    ColumnNotFound(String),
    CardNotFound(String),
    CardNotInColumn { card_id: String, column_id: String },
    AlreadyInPlace,
    NothingToChange,
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOpReason::EmptyTitle => write!(f, "title must not be empty"),
            NoOpReason::ColumnNotFound(id) => write!(f, "column not found: {}", id),
            NoOpReason::CardNotFound(id) => write!(f, "card not found: {}", id),
            NoOpReason::CardNotInColumn { card_id, column_id } => {
                write!(f, "card {} is not in column {}", card_id, column_id)
            }
            NoOpReason::AlreadyInPlace => write!(f, "card is already at that position"),
            NoOpReason::NothingToChange => write!(f, "update does not change the card"),
        }
    }
}
