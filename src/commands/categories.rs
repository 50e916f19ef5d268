//! Category listing command

use crate::wordlists::WordRepository;

/// One category with its word count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub words: usize,
}

/// Summaries for every loaded category, in menu order
#[must_use]
pub fn category_summaries(repository: &WordRepository) -> Vec<CategorySummary> {
    repository
        .available_categories()
        .into_iter()
        .map(|name| CategorySummary {
            name: name.to_string(),
            words: repository.pool(Some(name)).1.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn summaries_follow_menu_order() {
        let repository = WordRepository::new([
            ("Science".to_string(), words_from_slice(&["atom"])),
            ("Animals".to_string(), words_from_slice(&["cat", "dog"])),
        ]);

        let summaries = category_summaries(&repository);

        assert_eq!(
            summaries,
            vec![
                CategorySummary {
                    name: "Animals".to_string(),
                    words: 2,
                },
                CategorySummary {
                    name: "Science".to_string(),
                    words: 1,
                },
            ]
        );
    }

    #[test]
    fn embedded_categories_are_listed() {
        let summaries = category_summaries(&WordRepository::from_embedded());
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|s| s.words > 0));
    }
}
