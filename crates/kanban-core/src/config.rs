use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How freshly created columns and cards are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    /// `col-<uuid>` / `card-<uuid>`
    #[default]
    Uuid,
    /// `col-1`, `card-2`, ... from a monotonic counter
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Column titles of the starter board used when no saved board exists.
    #[serde(default = "default_seed_columns")]
    pub seed_columns: Vec<String>,
    /// Maximum number of undo steps kept by the board store.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub id_style: IdStyle,
}

fn default_seed_columns() -> Vec<String> {
    vec![
        "To Do".to_string(),
        "In Progress".to_string(),
        "Done".to_string(),
    ]
}

fn default_history_limit() -> usize {
    100
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed_columns: default_seed_columns(),
            history_limit: default_history_limit(),
            id_style: IdStyle::default(),
        }
    }
}

impl EditorConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user's configuration, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Seed titles with blank entries removed.
    pub fn effective_seed_columns(&self) -> Vec<&str> {
        self.seed_columns
            .iter()
            .map(|title| title.trim())
            .filter(|title| !title.is_empty())
            .collect()
    }
}
