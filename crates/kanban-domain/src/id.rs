//! Identifier allocation for new columns and cards.
//!
//! Generators are owned by whoever drives the commands (normally the board
//! store) and passed in through [`crate::CommandContext`]; there is no
//! process-wide counter.

use kanban_core::{IdStyle, KanbanError, KanbanResult};
use uuid::Uuid;

/// Attempts made to find an id not already present on a board.
const MAX_ALLOCATION_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Column,
    Card,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Column => "col",
            IdKind::Card => "card",
        }
    }
}

/// Source of candidate identifiers.
///
/// Candidates are not required to be unique on their own: callers check them
/// against the board and ask again on collision (see [`allocate`]).
pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String;

    /// Note an id already present on a board so later candidates skip it.
    fn reserve(&mut self, _existing: &str) {}
}

/// Random `col-<uuid>` / `card-<uuid>` identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String {
        format!("{}-{}", kind.prefix(), Uuid::new_v4())
    }
}

/// Monotonic `col-1`, `card-2`, ... identifiers sharing one counter.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String {
        let id = format!("{}-{}", kind.prefix(), self.next);
        self.next += 1;
        id
    }

    fn reserve(&mut self, existing: &str) {
        let suffix = [IdKind::Column, IdKind::Card].iter().find_map(|kind| {
            existing
                .strip_prefix(kind.prefix())
                .and_then(|rest| rest.strip_prefix('-'))
        });
        if let Some(n) = suffix.and_then(|s| s.parse::<u64>().ok()) {
            self.next = self.next.max(n.saturating_add(1));
        }
    }
}

/// Build the generator selected by configuration.
pub fn generator_for(style: IdStyle) -> Box<dyn IdGenerator> {
    match style {
        IdStyle::Uuid => Box::new(UuidIdGenerator),
        IdStyle::Sequential => Box::new(SequentialIdGenerator::new()),
    }
}

/// Draw candidates until one is not taken.
pub fn allocate(
    ids: &mut dyn IdGenerator,
    kind: IdKind,
    is_taken: impl Fn(&str) -> bool,
) -> KanbanResult<String> {
    for _ in 0..MAX_ALLOCATION_ATTEMPTS {
        let candidate = ids.next_id(kind);
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(KanbanError::Internal(format!(
        "could not allocate a unique {} id after {} attempts",
        kind.prefix(),
        MAX_ALLOCATION_ATTEMPTS
    )))
}
