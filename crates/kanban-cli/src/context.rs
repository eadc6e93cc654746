use crate::atomic_writer::AtomicWriter;
use kanban_core::{EditorConfig, KanbanResult};
use kanban_domain::CommandOutcome;
use kanban_state::BoardStore;
use std::path::{Path, PathBuf};

/// A board file opened for one CLI invocation.
pub struct CliContext {
    pub store: BoardStore,
    path: PathBuf,
}

impl CliContext {
    /// Open `file_path`, or start from the configured starter board when it
    /// does not exist yet.
    pub fn load(file_path: &str) -> KanbanResult<Self> {
        let path = PathBuf::from(file_path);
        let config = EditorConfig::load();

        let store = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            let mut store = BoardStore::with_board(Default::default(), &config);
            store.import_board(&text)?;
            store
        } else {
            tracing::info!("No board at {}, starting a new one", path.display());
            BoardStore::from_config(&config)?
        };

        Ok(Self { store, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> KanbanResult<()> {
        let json = self.store.export_board()?;
        AtomicWriter::write_atomic(&self.path, json.as_bytes())
    }

    /// Save when the outcome changed the board.
    pub fn save_if_changed(&self, outcome: &CommandOutcome) -> KanbanResult<()> {
        if outcome.is_change() {
            self.save()?;
        }
        Ok(())
    }
}
