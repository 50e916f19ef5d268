//! Runtime configuration
//!
//! Every on-disk location the game uses is derived from a single data directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "hangman";
const FALLBACK_DIR: &str = "hangman-data";

/// Paths used by a running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    data_dir: PathBuf,
}

impl GameConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Use `data_dir` when given, otherwise the platform data directory
    #[must_use]
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        data_dir.map_or_else(|| Self::new(default_data_dir()), Self::new)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `<data>/words`
    #[must_use]
    pub fn words_dir(&self) -> PathBuf {
        self.data_dir.join("words")
    }

    /// `<data>/words/categories`, one `<name>.txt` per category
    #[must_use]
    pub fn categories_dir(&self) -> PathBuf {
        self.words_dir().join("categories")
    }

    /// `<data>/game_log`, one `game<N>` folder per session
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("game_log")
    }

    /// `<data>/game_log/stats.txt`
    #[must_use]
    pub fn stats_file(&self) -> PathBuf {
        self.log_dir().join("stats.txt")
    }

    /// Application log used while the TUI owns the terminal
    #[must_use]
    pub fn app_log_file(&self) -> PathBuf {
        self.data_dir.join("hangman.log")
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// Platform data directory for the game, or `./hangman-data` when there is none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(FALLBACK_DIR), |dir| dir.join(APP_DIR))
}
