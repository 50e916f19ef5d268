//! Hangman word representation
//!
//! A Word stores a lowercase candidate word along with the set of distinct characters
//! it contains, so letter membership checks are constant time.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase hangman word with letter membership tracking
///
/// Words contain only alphabetic characters and underscores. Underscores are kept as
/// literal characters: they are part of the word and must be revealed like any letter.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    length: usize,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' contains characters other than letters and underscores")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains anything other than alphabetic characters or `_`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Polar_Bear").unwrap();
    /// assert_eq!(word.text(), "polar_bear");
    /// assert_eq!(word.length(), 10);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("neo4j").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_alphabetic() || c == '_') {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters: FxHashSet<char> = text.chars().collect();
        let length = text.chars().count();

        Ok(Self {
            text,
            length,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Iterate over the characters of the word in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check if the word contains a specific character
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct characters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
