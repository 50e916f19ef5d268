//! Main hangman solver interface

use super::strategy::Strategy;
use crate::core::Word;
use crate::game::Board;

/// A move the solver wants to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Letter(char),
    Word(String),
}

/// Hangman solver
///
/// Narrows a word pool down to the candidates consistent with a board and asks its
/// strategy for the next letter.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    pool: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and candidate pool
    pub const fn new(strategy: S, pool: &'a [Word]) -> Self {
        Self { strategy, pool }
    }

    /// Pool words consistent with everything shown on the board
    ///
    /// A candidate has the board's length, matches every revealed position, shows no
    /// revealed letter at a hidden position, and contains none of the wrong letters.
    #[must_use]
    pub fn candidates(&self, board: &Board<'_>) -> Vec<&'a Word> {
        self.pool
            .iter()
            .filter(|word| is_consistent(word, board))
            .collect()
    }

    /// Number of candidates consistent with the board
    #[must_use]
    pub fn count_candidates(&self, board: &Board<'_>) -> usize {
        self.pool.iter().filter(|word| is_consistent(word, board)).count()
    }

    /// Best next letter according to the strategy
    #[must_use]
    pub fn suggest_letter(&self, board: &Board<'_>) -> Option<char> {
        let candidates = self.candidates(board);
        self.strategy.select_letter(board, &candidates)
    }

    /// Next move: the word itself once a single candidate remains, otherwise a letter
    ///
    /// Falls back to guessing the first candidate when no letter separates the
    /// remaining candidates. Returns `None` only when nothing is left to try.
    #[must_use]
    pub fn next_move(&self, board: &Board<'_>) -> Option<Move> {
        let candidates = self.candidates(board);

        if let [only] = candidates.as_slice() {
            return Some(Move::Word(only.text().to_string()));
        }

        self.strategy
            .select_letter(board, &candidates)
            .map(Move::Letter)
            .or_else(|| candidates.first().map(|w| Move::Word(w.text().to_string())))
    }
}

fn is_consistent(word: &Word, board: &Board<'_>) -> bool {
    if word.length() != board.revealed.len() {
        return false;
    }
    if board.wrong_letters.iter().any(|&c| word.contains(c)) {
        return false;
    }

    word.chars().zip(&board.revealed).all(|(c, shown)| match shown {
        Some(letter) => c == *letter,
        None => !board.revealed.contains(&Some(c)),
    })
}
