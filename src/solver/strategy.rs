//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use crate::game::Board;
use rustc_hash::FxHashMap;

/// English letters from most to least frequent
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select a letter not yet guessed on `board`
    ///
    /// `candidates` are the pool words still consistent with the board. Returns `None`
    /// if no useful letter is left.
    fn select_letter(&self, board: &Board<'_>, candidates: &[&Word]) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, board: &Board<'_>, candidates: &[&Word]) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(board, candidates),
            Self::Random(s) => s.select_letter(board, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Letter frequency strategy
///
/// Picks the unguessed letter that appears in the most candidates, breaking ties
/// alphabetically. With no candidates it falls back to English letter frequency.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, board: &Board<'_>, candidates: &[&Word]) -> Option<char> {
        let counts = letter_counts(board, candidates);

        let best = counts
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
            .map(|(letter, _)| letter);

        best.or_else(|| {
            if candidates.is_empty() {
                ENGLISH_FREQUENCY_ORDER
                    .chars()
                    .find(|c| !board.guessed.contains(c))
            } else {
                None
            }
        })
    }
}

/// For each unguessed alphabetic letter, the number of candidates containing it
#[must_use]
pub fn letter_counts(board: &Board<'_>, candidates: &[&Word]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for word in candidates {
        for &letter in word.letters() {
            if letter.is_alphabetic() && !board.guessed.contains(&letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Random strategy
///
/// Picks any unguessed letter a-z. Useful as a baseline for benchmarks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, board: &Board<'_>, _candidates: &[&Word]) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let unguessed: Vec<char> = ('a'..='z')
            .filter(|c| !board.guessed.contains(c))
            .collect();
        unguessed.choose(&mut rand::rng()).copied()
    }
}
