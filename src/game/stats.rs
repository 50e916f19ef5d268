//! Cumulative game statistics
//!
//! `Stats` folds finished sessions into running counters. `StatsStore` persists the
//! record as `key=value` lines and recovers from damaged files by starting over at zero.

use super::session::{GameResult, Outcome};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reading or writing the stats file
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt stats record: {0}")]
    Corrupt(String),
}

/// Running totals across every completed game
///
/// `games_played == wins + losses` holds after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub games_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_score: u64,
}

impl Stats {
    /// Fold one finished session into the totals
    pub fn record_outcome(&mut self, outcome: &Outcome) {
        self.games_played += 1;
        match outcome.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
        }
        self.total_score += u64::from(outcome.score);
    }

    /// Win percentage, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Mean score per game, 0 when no games were played
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games_played as f64
        }
    }

    /// Serialize as `key=value` lines
    #[must_use]
    pub fn to_record(&self) -> String {
        let mut record = String::new();
        for (key, value) in self.fields() {
            let _ = writeln!(record, "{key}={value}");
        }
        record
    }

    /// Parse a `key=value` record
    ///
    /// Unknown keys and lines without `=` are ignored. A missing or unparsable value
    /// counts as 0.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Corrupt` if the parsed counters are inconsistent
    /// (`games_played != wins + losses`).
    pub fn parse(content: &str) -> Result<Self, StatsError> {
        let mut stats = Self::default();

        for line in content.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            let slot = match key.trim() {
                "games_played" => &mut stats.games_played,
                "wins" => &mut stats.wins,
                "losses" => &mut stats.losses,
                "total_score" => &mut stats.total_score,
                _ => continue,
            };
            *slot = value.trim().parse().unwrap_or_else(|_| {
                warn!(key, value, "unparsable stats value, using 0");
                0
            });
        }

        if stats.wins.checked_add(stats.losses) != Some(stats.games_played) {
            return Err(StatsError::Corrupt(format!(
                "games_played={} but wins={} and losses={}",
                stats.games_played, stats.wins, stats.losses
            )));
        }

        Ok(stats)
    }

    const fn fields(&self) -> [(&'static str, u64); 4] {
        [
            ("games_played", self.games_played),
            ("wins", self.wins),
            ("losses", self.losses),
            ("total_score", self.total_score),
        ]
    }
}

/// Stats file on disk
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record, never failing
    ///
    /// A missing file is created with zeros. An unreadable or corrupt file is replaced
    /// with zeros and a warning is logged.
    #[must_use]
    pub fn load(&self) -> Stats {
        match self.try_load() {
            Ok(Some(stats)) => {
                debug!(path = %self.path.display(), ?stats, "loaded stats");
                stats
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no stats file, starting fresh");
                self.reset_quietly();
                Stats::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "resetting unreadable stats");
                self.reset_quietly();
                Stats::default()
            }
        }
    }

    /// Read the record, `None` when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` for read failures and `StatsError::Corrupt` for
    /// inconsistent records.
    pub fn try_load(&self) -> Result<Option<Stats>, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StatsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Stats::parse(&content).map(Some)
    }

    /// Write the record, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the file cannot be written.
    pub fn save(&self, stats: &Stats) -> Result<(), StatsError> {
        let io_error = |source| StatsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&self.path, stats.to_record()).map_err(io_error)?;
        debug!(path = %self.path.display(), ?stats, "saved stats");
        Ok(())
    }

    fn reset_quietly(&self) {
        if let Err(e) = self.save(&Stats::default()) {
            warn!(error = %e, "could not write default stats");
        }
    }
}
