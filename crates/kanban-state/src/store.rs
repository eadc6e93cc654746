use crate::action::Action;
use crate::observer::{BoardObserver, ChangeCause, SubscriptionId};
use kanban_core::{EditorConfig, KanbanResult};
use kanban_domain::commands::{
    AddCard, AddColumn, Command, MoveCard, RemoveCard, RemoveColumn, UpdateCard,
};
use kanban_domain::{
    generator_for, resolve_drop, Board, BoardExporter, BoardImporter, CardDraft, CardUpdate,
    CommandOutcome, DragSource, DropTarget, HistoryManager, IdGenerator, NoOpReason,
};
use std::sync::Arc;

/// Single source of truth for an editing session.
///
/// Every action reads the board left by the previous one and either
/// publishes a complete new board or leaves the current one in place.
/// Published boards are shared as `Arc<Board>` and never modified, so a
/// caller holding an older board does not see later changes.
pub struct BoardStore {
    board: Arc<Board>,
    ids: Box<dyn IdGenerator>,
    history: HistoryManager,
    observers: Vec<(SubscriptionId, Box<dyn BoardObserver>)>,
    next_subscription: u64,
}

impl BoardStore {
    pub fn new(board: Board, mut ids: Box<dyn IdGenerator>, history_limit: usize) -> Self {
        board.reserve_ids(ids.as_mut());
        Self {
            board: Arc::new(board),
            ids,
            history: HistoryManager::new(history_limit),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store holding the configured starter board.
    pub fn from_config(config: &EditorConfig) -> KanbanResult<Self> {
        let mut ids = generator_for(config.id_style);
        let titles = config.effective_seed_columns();
        let board = Board::seeded(titles.as_slice(), ids.as_mut())?;
        Ok(Self::new(board, ids, config.history_limit))
    }

    /// Store holding an existing board, using the configured id style and
    /// history depth.
    pub fn with_board(board: Board, config: &EditorConfig) -> Self {
        Self::new(board, generator_for(config.id_style), config.history_limit)
    }

    /// The current board.
    pub fn board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn dispatch(&mut self, action: Action) -> KanbanResult<CommandOutcome> {
        self.execute(action.as_command())
    }

    /// Run a command against the current board and publish the result.
    pub fn execute(&mut self, command: &dyn Command) -> KanbanResult<CommandOutcome> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let (next, outcome) = command.apply(&self.board, self.ids.as_mut())?;
        match &outcome {
            CommandOutcome::Unchanged(reason) => {
                tracing::debug!("No change from '{}': {}", description, reason);
            }
            _ => self.commit(next, ChangeCause::Command(description)),
        }
        Ok(outcome)
    }

    pub fn add_column(&mut self, title: impl Into<String>) -> KanbanResult<CommandOutcome> {
        self.execute(&AddColumn::new(title))
    }

    pub fn remove_column(&mut self, column_id: impl Into<String>) -> KanbanResult<CommandOutcome> {
        self.execute(&RemoveColumn {
            column_id: column_id.into(),
        })
    }

    pub fn add_card(
        &mut self,
        column_id: impl Into<String>,
        draft: CardDraft,
    ) -> KanbanResult<CommandOutcome> {
        self.execute(&AddCard {
            column_id: column_id.into(),
            draft,
        })
    }

    pub fn update_card(
        &mut self,
        card_id: impl Into<String>,
        update: CardUpdate,
    ) -> KanbanResult<CommandOutcome> {
        self.execute(&UpdateCard {
            card_id: card_id.into(),
            update,
        })
    }

    pub fn remove_card(&mut self, card_id: impl Into<String>) -> KanbanResult<CommandOutcome> {
        self.execute(&RemoveCard {
            card_id: card_id.into(),
        })
    }

    pub fn move_card(&mut self, payload: MoveCard) -> KanbanResult<CommandOutcome> {
        self.execute(&payload)
    }

    /// Apply a finished drag gesture, resolving the target against the
    /// current board.
    pub fn drop_card(
        &mut self,
        source: &DragSource,
        target: &DropTarget,
    ) -> KanbanResult<CommandOutcome> {
        match resolve_drop(&self.board, source, target) {
            Some(payload) => self.move_card(payload),
            None => Ok(CommandOutcome::Unchanged(NoOpReason::CardNotInColumn {
                card_id: source.card_id.clone(),
                column_id: source.column_id.clone(),
            })),
        }
    }

    /// Replace the board with the one described by `text`.
    ///
    /// On any failure the current board stays as it is and no observer is
    /// notified.
    pub fn import_board(&mut self, text: &str) -> KanbanResult<()> {
        let board = match BoardImporter::import_from_json(text) {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!("Rejected board import: {}", e);
                return Err(e);
            }
        };

        let orphans = board.orphaned_cards();
        if !orphans.is_empty() {
            tracing::warn!(
                "Imported board has {} card(s) not listed by any column: {:?}",
                orphans.len(),
                orphans
            );
        }

        tracing::info!(
            "Imported board with {} columns and {} cards",
            board.columns.len(),
            board.card_count()
        );
        board.reserve_ids(self.ids.as_mut());
        self.commit(board, ChangeCause::Import);
        Ok(())
    }

    pub fn export_board(&self) -> KanbanResult<String> {
        BoardExporter::export_to_json(&self.board)
    }

    /// Replace the board wholesale and forget history.
    pub fn reset(&mut self, board: Board) {
        board.reserve_ids(self.ids.as_mut());
        self.board = Arc::new(board);
        self.history.clear();
        self.notify(&ChangeCause::Reset);
    }

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_undo() else {
            return false;
        };
        let current = std::mem::replace(&mut self.board, previous);
        self.history.push_redo(current);
        self.notify(&ChangeCause::Undo);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.pop_redo() else {
            return false;
        };
        let current = std::mem::replace(&mut self.board, next);
        self.history.push_undo(current);
        self.notify(&ChangeCause::Redo);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self, next: Board, cause: ChangeCause) {
        let previous = std::mem::replace(&mut self.board, Arc::new(next));
        self.history.capture_before_command(previous);
        self.notify(&cause);
    }

    fn notify(&mut self, cause: &ChangeCause) {
        for (_, observer) in self.observers.iter_mut() {
            observer.board_changed(&self.board, cause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::SequentialIdGenerator;

    fn store() -> BoardStore {
        let mut ids = SequentialIdGenerator::new();
        let board = Board::seeded(&["todo", "done"], &mut ids).unwrap();
        BoardStore::new(board, Box::new(ids), 10)
    }

    #[test]
    fn test_actions_apply_in_order() {
        let mut store = store();
        let first = store.add_card("col-1", CardDraft::new("First")).unwrap();
        let second = store.add_card("col-1", CardDraft::new("Second")).unwrap();

        let board = store.board();
        assert_eq!(
            board.columns[0].card_ids,
            vec![
                first.created_id().unwrap().to_string(),
                second.created_id().unwrap().to_string()
            ]
        );
    }

    #[test]
    fn test_unchanged_outcome_keeps_same_board() {
        let mut store = store();
        let before = store.board();
        let outcome = store.remove_card("missing").unwrap();

        assert!(!outcome.is_change());
        assert!(Arc::ptr_eq(&before, &store.board()));
        assert!(!store.can_undo());
    }

    #[test]
    fn test_old_snapshot_is_not_affected_by_later_changes() {
        let mut store = store();
        let before = store.board();
        store.add_column("Review").unwrap();

        assert_eq!(before.columns.len(), 2);
        assert_eq!(store.board().columns.len(), 3);
    }

    #[test]
    fn test_from_config_seeds_columns() {
        let config = EditorConfig {
            seed_columns: vec!["Backlog".into(), " ".into(), "Shipped".into()],
            id_style: kanban_core::IdStyle::Sequential,
            ..EditorConfig::default()
        };
        let store = BoardStore::from_config(&config).unwrap();
        let titles: Vec<_> = store
            .board()
            .columns
            .iter()
            .map(|c| c.title.clone())
            .collect();
        assert_eq!(titles, vec!["Backlog", "Shipped"]);
    }
}
