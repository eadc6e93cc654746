//! Undo/redo history management.
//!
//! Boards are immutable once published, so history keeps shared `Arc`
//! handles to previous boards instead of deep copies.

use crate::Board;
use std::collections::VecDeque;
use std::sync::Arc;

/// Manages undo/redo history of whole boards.
///
/// Before each mutation, record the current board with `capture_before_command`.
/// The manager maintains separate stacks for undo and redo operations.
#[derive(Debug)]
pub struct HistoryManager {
    /// Stack of boards for undo (most recent = back of deque).
    undo_stack: VecDeque<Arc<Board>>,

    /// Stack of boards for redo (most recent = back of deque).
    redo_stack: VecDeque<Arc<Board>>,

    /// Maximum undo depth; the oldest entries are dropped beyond it.
    limit: usize,
}

impl HistoryManager {
    /// Create new history manager keeping at most `limit` undo steps.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit,
        }
    }

    /// Record the board as it was before a command executed.
    ///
    /// Clears the redo stack: any new action after an undo invalidates the
    /// redo history.
    pub fn capture_before_command(&mut self, board: Arc<Board>) {
        self.push_undo(board);
        self.redo_stack.clear();
    }

    /// Pop most recent board from undo stack for restoration.
    pub fn pop_undo(&mut self) -> Option<Arc<Board>> {
        self.undo_stack.pop_back()
    }

    /// Pop most recent board from redo stack for restoration.
    pub fn pop_redo(&mut self) -> Option<Arc<Board>> {
        self.redo_stack.pop_back()
    }

    /// Push current board to redo stack (before applying undo).
    pub fn push_redo(&mut self, board: Arc<Board>) {
        self.redo_stack.push_back(board);
    }

    /// Push current board to undo stack (before applying redo).
    pub fn push_undo(&mut self, board: Arc<Board>) {
        if self.limit == 0 {
            return;
        }
        self.undo_stack.push_back(board);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history (called when the board is replaced wholesale).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(100)
    }
}
