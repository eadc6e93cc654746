pub mod config;
pub mod error;

pub use config::{EditorConfig, IdStyle};
pub use error::{KanbanError, KanbanResult};
