//! Hangman solving algorithms
//!
//! Automatic letter selection, used for hints and for benchmark play.

mod engine;
pub mod strategy;

pub use engine::{Move, Solver};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
