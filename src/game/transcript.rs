//! Per-session transcripts
//!
//! A transcript is an append-only record of one session: a header written when the
//! session starts, one line per accepted guess, and a closing result block. On disk each
//! session gets `game<N>/log.txt` under the log directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors writing a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Opening block of a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptHeader<'a> {
    pub session_id: u64,
    pub category: &'a str,
    pub word: &'a str,
    pub word_length: usize,
}

impl TranscriptHeader<'_> {
    /// Header lines, ending with the guesses caption
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Game {} Log", self.session_id),
            format!("Category: {}", self.category),
            format!("Word: {}", self.word),
            format!("Word Length: {}", self.word_length),
            String::new(),
            "Guesses (in order):".to_string(),
        ]
    }
}

/// Append-only sink for session records
///
/// Lines are never reordered or edited once written.
pub trait Transcript {
    /// Write the header block; called once, before any line is appended
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError` if the underlying storage cannot be written.
    fn write_header(&mut self, header: &TranscriptHeader<'_>) -> Result<(), TranscriptError>;

    /// Append a single line
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError` if the underlying storage cannot be written.
    fn append_line(&mut self, line: &str) -> Result<(), TranscriptError>;
}

/// Transcript stored as `<log dir>/game<N>/log.txt`
#[derive(Debug)]
pub struct FileTranscript {
    path: PathBuf,
    file: File,
}

impl FileTranscript {
    /// Create the session directory and an empty log file
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError::Io` if the directory or file cannot be created.
    pub fn create(log_dir: &Path, session_id: u64) -> Result<Self, TranscriptError> {
        let game_dir = session_dir(log_dir, session_id);
        fs::create_dir_all(&game_dir).map_err(|source| TranscriptError::Io {
            path: game_dir.clone(),
            source,
        })?;

        let path = game_dir.join("log.txt");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| TranscriptError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "opened transcript");
        Ok(Self { path, file })
    }

    /// Location of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&mut self, text: &str) -> Result<(), TranscriptError> {
        self.file
            .write_all(text.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|source| TranscriptError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

impl Transcript for FileTranscript {
    fn write_header(&mut self, header: &TranscriptHeader<'_>) -> Result<(), TranscriptError> {
        let mut text = header.lines().join("\n");
        text.push('\n');
        self.write_all(&text)
    }

    fn append_line(&mut self, line: &str) -> Result<(), TranscriptError> {
        self.write_all(&format!("{line}\n"))
    }
}

/// Transcript kept in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryTranscript {
    lines: Vec<String>,
}

impl MemoryTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full transcript text, one line per record
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

impl Transcript for MemoryTranscript {
    fn write_header(&mut self, header: &TranscriptHeader<'_>) -> Result<(), TranscriptError> {
        self.lines.extend(header.lines());
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<(), TranscriptError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Transcript that discards everything, for simulated games
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTranscript;

impl Transcript for NullTranscript {
    fn write_header(&mut self, _header: &TranscriptHeader<'_>) -> Result<(), TranscriptError> {
        Ok(())
    }

    fn append_line(&mut self, _line: &str) -> Result<(), TranscriptError> {
        Ok(())
    }
}

/// Directory holding one `game<N>` folder per session
#[must_use]
pub fn session_dir(log_dir: &Path, session_id: u64) -> PathBuf {
    log_dir.join(format!("game{session_id}"))
}

/// Hands out monotonically increasing session numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounter {
    next: u64,
}

impl SessionCounter {
    /// Counter whose first id is `next`
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Counter continuing after the highest `game<N>` directory in `log_dir`
    ///
    /// A missing directory counts as empty, so numbering starts at 1.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if an existing directory cannot be listed.
    pub fn from_log_dir(log_dir: &Path) -> io::Result<Self> {
        let entries = match fs::read_dir(log_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::starting_at(1)),
            Err(e) => return Err(e),
        };

        let highest = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| parse_session_dir(&entry.file_name().to_string_lossy()))
            .max()
            .unwrap_or(0);

        Ok(Self::starting_at(highest + 1))
    }

    /// Id the next call to `next_id` will return
    #[must_use]
    pub const fn peek(&self) -> u64 {
        self.next
    }

    /// Allocate the next session id
    pub const fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn parse_session_dir(name: &str) -> Option<u64> {
    let digits = name.strip_prefix("game")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Log directory paired with its session counter
#[derive(Debug, Clone)]
pub struct TranscriptDir {
    root: PathBuf,
    counter: SessionCounter,
}

impl TranscriptDir {
    /// Open a log directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError::Io` if the directory cannot be created or listed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, TranscriptError> {
        let root = root.into();
        let io_error = |source| TranscriptError::Io {
            path: root.clone(),
            source,
        };

        fs::create_dir_all(&root).map_err(io_error)?;
        let counter = SessionCounter::from_log_dir(&root).map_err(io_error)?;
        debug!(dir = %root.display(), next = counter.peek(), "transcript directory ready");

        Ok(Self { root, counter })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocate a session id and create its transcript file
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError::Io` if the session directory cannot be created.
    pub fn open_next(&mut self) -> Result<(u64, FileTranscript), TranscriptError> {
        let id = self.counter.next_id();
        let transcript = FileTranscript::create(&self.root, id)?;
        Ok((id, transcript))
    }
}
