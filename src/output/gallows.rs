//! Gallows drawings keyed by wrong-guess count

use crate::game::MAX_WRONG;

const STAGES: [&str; MAX_WRONG as usize + 1] = [
    "  +---+
  |   |
      |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 /    |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
      |
=========",
];

/// Drawing for `wrong` wrong guesses; counts past the limit show the full figure
#[must_use]
pub fn gallows(wrong: u32) -> &'static str {
    let index = (wrong as usize).min(STAGES.len() - 1);
    STAGES[index]
}
