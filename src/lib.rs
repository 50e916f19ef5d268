//! Hangman
//!
//! A category-based hangman game: word lists, a session engine with transcripts and
//! cumulative stats, a letter-frequency solver, and text and TUI front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GameSession, GameState, MemoryTranscript};
//! use hangman::wordlists::{SelectedWord, WordRepository};
//! use hangman::core::Word;
//!
//! let word = Word::new("cat").unwrap();
//! let selection = SelectedWord { length: word.length(), word, category: "Animals".into() };
//! let mut session = GameSession::new(1, selection, MemoryTranscript::new());
//!
//! session.guess_letter("c").unwrap();
//! session.guess_word("cat").unwrap();
//! assert_eq!(session.state(), GameState::Won);
//! assert_eq!(session.compute_score(), 30);
//!
//! // Built-in categories are always available
//! let repository = WordRepository::from_embedded();
//! assert!(repository.available_categories().contains(&"Animals"));
//! ```

// Data directory layout
pub mod config;

// Core domain types
pub mod core;

// Session engine, transcripts and stats
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
