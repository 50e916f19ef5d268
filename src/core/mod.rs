//! Core domain types for hangman
//!
//! Words and guesses, with no I/O. Everything here is pure and testable.

mod guess;
mod word;

pub use guess::{GuessError, GuessOutcome, PlayerInput, normalize_letter};
pub use word::{Word, WordError};
