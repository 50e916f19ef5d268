//! Word lists for hangman
//!
//! Built-in category lists compiled into the binary, file-backed category loading,
//! and the repository that answers word queries.

mod embedded;
pub mod loader;
pub mod repository;

pub use embedded::{ANIMALS, COUNTRIES, DEFAULT_CATEGORIES, PROGRAMMING, SCIENCE};
pub use repository::{ALL_CATEGORIES, RepositoryError, SelectedWord, WordRepository};
