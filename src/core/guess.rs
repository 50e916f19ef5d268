//! Guess validation and results
//!
//! Letter normalization, the outcome of an accepted guess, and the reasons a guess is
//! rejected without touching session state.

use std::fmt;
use thiserror::Error;

/// Result of a guess that was accepted and evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word
    Correct(char),
    /// The letter does not occur in the word
    Wrong(char),
    /// The full-word attempt matched the word
    WordCorrect,
    /// The full-word attempt did not match
    WordWrong,
}

impl GuessOutcome {
    /// Whether the guess revealed something rather than costing an attempt
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct(_) | Self::WordCorrect)
    }

    /// Transcript verdict for this outcome
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        if self.is_correct() { "Correct" } else { "Wrong" }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct(_) => write!(f, "Correct!"),
            Self::Wrong(_) => write!(f, "Wrong!"),
            Self::WordCorrect => write!(f, "Correct! You guessed the word!"),
            Self::WordWrong => write!(f, "Wrong full-word guess."),
        }
    }
}

/// Reasons a guess is rejected
///
/// A rejected guess never mutates the session and never costs an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Not exactly one alphabetic character
    #[error("Invalid input.")]
    InvalidInput,
    /// The letter was already guessed this session
    #[error("You already guessed '{0}'.")]
    Duplicate(char),
    /// The session already reached a win or a loss
    #[error("The game is already over.")]
    GameOver,
}

/// Normalize a single-letter guess
///
/// # Errors
///
/// Returns `GuessError::InvalidInput` unless the input is exactly one alphabetic
/// character whose lowercase form is also a single character.
///
/// # Examples
/// ```
/// use hangman::core::normalize_letter;
///
/// assert_eq!(normalize_letter("Q"), Ok('q'));
/// assert!(normalize_letter("ab").is_err());
/// assert!(normalize_letter("7").is_err());
/// ```
pub fn normalize_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(GuessError::InvalidInput);
    };

    if !ch.is_alphabetic() {
        return Err(GuessError::InvalidInput);
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(GuessError::InvalidInput),
    }
}

/// A line of player input from a text front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Nothing entered; prompt again
    Empty,
    /// Leave the current game without recording it
    Quit,
    /// Switch to entering a full-word guess
    FullWord,
    /// A single normalized letter
    Letter(char),
    /// Anything else
    Invalid,
}

impl PlayerInput {
    /// Parse a raw input line
    ///
    /// `quit`/`exit` abandon the game, `guess` asks for a full word, and a single
    /// letter is a letter guess. Keywords are case-insensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "guess" => Self::FullWord,
            _ => normalize_letter(trimmed).map_or(Self::Invalid, Self::Letter),
        }
    }
}
