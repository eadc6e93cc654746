use kanban_domain::Board;
use std::sync::Arc;

/// What replaced the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeCause {
    /// A mutation command, with its description.
    Command(String),
    Import,
    Undo,
    Redo,
    Reset,
}

/// Receives every board published by a [`crate::BoardStore`].
pub trait BoardObserver {
    fn board_changed(&mut self, board: &Arc<Board>, cause: &ChangeCause);
}

impl<F> BoardObserver for F
where
    F: FnMut(&Arc<Board>, &ChangeCause),
{
    fn board_changed(&mut self, board: &Arc<Board>, cause: &ChangeCause) {
        self(board, cause)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
