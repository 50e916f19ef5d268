//! Session lifecycle around the engine
//!
//! `GameHost` owns the process-wide pieces a front end needs: the word repository, the
//! transcript directory and the cumulative stats. It starts sessions and, once a
//! session is finished, finalizes its transcript and folds it into the stats exactly
//! once. Abandoned sessions are dropped without touching either.

use super::session::{GameSession, Outcome, SessionError};
use super::stats::{Stats, StatsStore};
use super::transcript::{FileTranscript, TranscriptDir, TranscriptError};
use crate::config::GameConfig;
use crate::wordlists::{RepositoryError, WordRepository};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from setting up or starting games
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Process-wide game state shared by successive sessions
#[derive(Debug)]
pub struct GameHost {
    repository: WordRepository,
    transcripts: TranscriptDir,
    store: StatsStore,
    stats: Stats,
}

impl GameHost {
    /// Assemble a host from its parts, loading stats from `store`
    #[must_use]
    pub fn new(repository: WordRepository, transcripts: TranscriptDir, store: StatsStore) -> Self {
        let stats = store.load();
        Self {
            repository,
            transcripts,
            store,
            stats,
        }
    }

    /// Open the word files, log directory and stats file under `config`
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the category files or log directory cannot be prepared.
    pub fn open(config: &GameConfig) -> Result<Self, HostError> {
        let repository = WordRepository::from_dir(&config.categories_dir())?;
        let transcripts = TranscriptDir::open(config.log_dir())?;
        let store = StatsStore::new(config.stats_file());
        Ok(Self::new(repository, transcripts, store))
    }

    #[must_use]
    pub const fn repository(&self) -> &WordRepository {
        &self.repository
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Start a new session with a fresh session number and transcript
    ///
    /// # Errors
    ///
    /// Returns `HostError::Repository` if no word is available and
    /// `HostError::Transcript` if the transcript cannot be created.
    pub fn start(
        &mut self,
        category: Option<&str>,
    ) -> Result<GameSession<FileTranscript>, HostError> {
        let selection = self.repository.random_word(category)?;
        let (id, transcript) = self.transcripts.open_next()?;
        Ok(GameSession::new(id, selection, transcript))
    }

    /// Finalize a finished session and record it in the stats
    ///
    /// Stats are saved immediately; a save failure is logged and the in-memory totals
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Session` if the session is still running or was already
    /// finalized. Nothing is recorded in that case.
    pub fn complete(
        &mut self,
        session: &mut GameSession<FileTranscript>,
    ) -> Result<Outcome, HostError> {
        let outcome = session.finalize()?;
        self.stats.record_outcome(&outcome);

        if let Err(e) = self.store.save(&self.stats) {
            warn!(error = %e, "could not save stats");
        }
        info!(
            session = outcome.session_id,
            result = %outcome.result,
            score = outcome.score,
            games = self.stats.games_played,
            "game recorded"
        );

        Ok(outcome)
    }

    /// Zero the cumulative stats and persist them
    ///
    /// # Errors
    ///
    /// Returns the store error if the stats file cannot be written.
    pub fn reset_stats(&mut self) -> Result<(), super::stats::StatsError> {
        self.stats = Stats::default();
        self.store.save(&self.stats)
    }
}
