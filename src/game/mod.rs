//! Hangman game engine
//!
//! Sessions, their transcripts, cumulative stats, and the host that ties a session's
//! lifecycle to all three.

mod host;
mod session;
pub mod stats;
pub mod transcript;

pub use host::{GameHost, HostError};
pub use session::{
    Board, GameResult, GameSession, GameState, MAX_WRONG, Outcome, PLACEHOLDER, SessionError,
};
pub use stats::{Stats, StatsError, StatsStore};
pub use transcript::{
    FileTranscript, MemoryTranscript, NullTranscript, SessionCounter, Transcript, TranscriptDir,
    TranscriptError, TranscriptHeader,
};
