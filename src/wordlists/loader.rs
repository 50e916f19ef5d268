//! Word list loading utilities
//!
//! Loads category directories (one `<name>.txt` file per category) and seeds missing
//! category files from the embedded defaults.

use super::DEFAULT_CATEGORIES;
use super::repository::RepositoryError;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse a word list, one word per line
///
/// Blank lines are skipped and invalid entries are dropped with a warning.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping invalid word list entry");
                None
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/categories/animals.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog", "not a word"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Category display name for a file stem: `animals` becomes `Animals`
#[must_use]
pub fn category_name(stem: &str) -> String {
    let lower = stem.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Write any missing default category file into `dir`
///
/// Existing files are left untouched so player edits survive. Returns how many files
/// were written.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or a file cannot be written.
pub fn seed_default_categories(dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(dir)?;

    let mut written = 0;
    for (name, words) in DEFAULT_CATEGORIES {
        let path = dir.join(format!("{}.txt", name.to_lowercase()));
        if path.exists() {
            continue;
        }
        fs::write(&path, words.join("\n"))?;
        debug!(path = %path.display(), "seeded default category file");
        written += 1;
    }

    if written > 0 {
        info!(count = written, dir = %dir.display(), "seeded default categories");
    }
    Ok(written)
}

/// Load every `*.txt` category file in `dir`
///
/// Returns `(category name, words)` pairs sorted by file name.
///
/// # Errors
///
/// Returns `RepositoryError::Io` if the directory or one of its files cannot be read.
pub fn load_category_dir(dir: &Path) -> Result<Vec<(String, Vec<Word>)>, RepositoryError> {
    let io_error = |source| RepositoryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(io_error)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut categories = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let words = load_from_file(&path).map_err(|source| RepositoryError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(category = stem, count = words.len(), "loaded category file");
        categories.push((category_name(stem), words));
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "Dog", "polar_bear"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
        assert_eq!(words[2].text(), "polar_bear");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["rust", "neo4j", "", "go"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_word_list_trims_and_skips_blank_lines() {
        let words = parse_word_list("  Ant \n\n bee\n\t\ncow\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ant", "bee", "cow"]);
    }

    #[test]
    fn category_name_capitalizes_stem() {
        assert_eq!(category_name("animals"), "Animals");
        assert_eq!(category_name("SCIENCE"), "Science");
        assert_eq!(category_name(""), "");
    }

    #[test]
    fn seed_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let categories = dir.path().join("categories");

        let written = seed_default_categories(&categories).unwrap();
        assert_eq!(written, DEFAULT_CATEGORIES.len());
        assert!(categories.join("animals.txt").exists());

        let again = seed_default_categories(&categories).unwrap();
        assert_eq!(again, 0);
    }

    #[test]
    fn seed_preserves_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("animals.txt"), "yak").unwrap();

        seed_default_categories(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("animals.txt")).unwrap();
        assert_eq!(content, "yak");
    }

    #[test]
    fn load_category_dir_reads_txt_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fruit.txt"), "apple\npear\n").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let categories = load_category_dir(dir.path()).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].0, "Fruit");
        assert_eq!(categories[0].1.len(), 2);
    }

    #[test]
    fn load_category_dir_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let result = load_category_dir(&dir.path().join("missing"));
        assert!(matches!(result, Err(RepositoryError::Io { .. })));
    }
}
