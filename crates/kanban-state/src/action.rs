use kanban_domain::commands::{
    AddCard, AddColumn, Command, MoveCard, RemoveCard, RemoveColumn, UpdateCard,
};
use serde::{Deserialize, Serialize};

/// A board mutation requested by the UI layer.
///
/// Actions are plain data so they can be queued, logged, or sent across a
/// boundary before the store applies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    AddColumn(AddColumn),
    RemoveColumn(RemoveColumn),
    AddCard(AddCard),
    UpdateCard(UpdateCard),
    RemoveCard(RemoveCard),
    MoveCard(MoveCard),
}

impl Action {
    pub fn as_command(&self) -> &dyn Command {
        match self {
            Action::AddColumn(cmd) => cmd,
            Action::RemoveColumn(cmd) => cmd,
            Action::AddCard(cmd) => cmd,
            Action::UpdateCard(cmd) => cmd,
            Action::RemoveCard(cmd) => cmd,
            Action::MoveCard(cmd) => cmd,
        }
    }
}

impl From<MoveCard> for Action {
    fn from(cmd: MoveCard) -> Self {
        Action::MoveCard(cmd)
    }
}
