pub mod board;
pub mod card;
pub mod column;
pub mod commands;
pub mod drop_target;
pub mod export;
pub mod field_update;
pub mod history;
pub mod id;

pub use board::Board;
pub use card::{Card, CardDraft, CardId};
pub use column::{Column, ColumnId};
pub use commands::{Command, CommandContext, CommandOutcome, NoOpReason};
pub use drop_target::{resolve_drop, DragSource, DropTarget};
pub use export::{BoardExporter, BoardImporter};
pub use field_update::{CardUpdate, FieldUpdate};
pub use history::HistoryManager;
pub use id::{generator_for, IdGenerator, IdKind, SequentialIdGenerator, UuidIdGenerator};
