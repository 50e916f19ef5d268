//! Category word repository
//!
//! Holds named collections of candidate words and answers random-word and hint queries.
//! Populated once at startup, read-only afterwards.

use super::DEFAULT_CATEGORIES;
use super::loader::{load_category_dir, seed_default_categories, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Category label used when drawing from the union of every category
pub const ALL_CATEGORIES: &str = "All";

/// Errors from building or querying the repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The resolved pool contained no words
    #[error("no words available in category '{category}'")]
    EmptyPool { category: String },

    #[error("could not read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A word drawn for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWord {
    pub word: Word,
    pub length: usize,
    pub category: String,
}

/// Named collections of candidate words
///
/// Category names are unique and kept sorted. Empty categories are dropped on
/// construction, so a named pool is never empty.
#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    categories: BTreeMap<String, Vec<Word>>,
}

impl WordRepository {
    /// Build a repository from `(category, words)` pairs
    ///
    /// Later pairs with the same name replace earlier ones.
    pub fn new(categories: impl IntoIterator<Item = (String, Vec<Word>)>) -> Self {
        let categories = categories
            .into_iter()
            .filter(|(name, words)| {
                if words.is_empty() {
                    warn!(category = %name, "ignoring empty category");
                }
                !words.is_empty()
            })
            .collect();
        Self { categories }
    }

    /// Repository of the built-in categories
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(name, words)| ((*name).to_string(), words_from_slice(words))),
        )
    }

    /// Load a repository from a category directory, seeding missing defaults first
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory cannot be created or read.
    pub fn from_dir(dir: &Path) -> Result<Self, RepositoryError> {
        seed_default_categories(dir).map_err(|source| RepositoryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let repository = Self::new(load_category_dir(dir)?);
        debug!(
            categories = repository.categories.len(),
            words = repository.word_count(),
            "word repository ready"
        );
        Ok(repository)
    }

    /// Sorted category names, for selection menus
    #[must_use]
    pub fn available_categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Total number of words across every category
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Resolve a category argument to the pool it designates
    ///
    /// A known category name resolves to that category; anything else (including
    /// `None` and the empty string) resolves to the union of all categories under
    /// the `All` label.
    #[must_use]
    pub fn pool(&self, category: Option<&str>) -> (&str, Vec<&Word>) {
        if let Some(name) = category
            && let Some((key, words)) = self.categories.get_key_value(name)
        {
            return (key.as_str(), words.iter().collect());
        }

        (
            ALL_CATEGORIES,
            self.categories.values().flatten().collect(),
        )
    }

    /// Draw a uniformly random word using the thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyPool` if the resolved pool has no words.
    pub fn random_word(&self, category: Option<&str>) -> Result<SelectedWord, RepositoryError> {
        self.random_word_with(&mut rand::rng(), category)
    }

    /// Draw a uniformly random word from the resolved pool using `rng`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyPool` if the resolved pool has no words.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordRepository;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let repository = WordRepository::from_embedded();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let picked = repository.random_word_with(&mut rng, Some("Animals")).unwrap();
    /// assert_eq!(picked.category, "Animals");
    /// assert_eq!(picked.length, picked.word.length());
    /// ```
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: Option<&str>,
    ) -> Result<SelectedWord, RepositoryError> {
        let (label, pool) = self.pool(category);
        let word = pool
            .choose(rng)
            .ok_or_else(|| RepositoryError::EmptyPool {
                category: label.to_string(),
            })?;

        Ok(SelectedWord {
            word: (*word).clone(),
            length: word.length(),
            category: label.to_string(),
        })
    }

    /// Words of the resolved pool with exactly `length` characters
    ///
    /// Used for hint display; may be empty.
    #[must_use]
    pub fn words_of_length(&self, category: Option<&str>, length: usize) -> Vec<&Word> {
        let (_, pool) = self.pool(category);
        pool.into_iter().filter(|w| w.length() == length).collect()
    }

    /// Match a menu choice against the category list
    ///
    /// Accepts a 1-based index into `available_categories` or a case-insensitive name.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn resolve_choice(&self, choice: &str) -> Option<&str> {
        let choice = choice.trim();
        let categories = self.available_categories();

        if let Ok(index) = choice.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| categories.get(i))
                .copied();
        }

        categories
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(choice))
    }
}
