//! Token and category frequency counts
//!
//! The store is the whole learned state of a classifier. It counts token
//! occurrences per category and training observations per category. Counts
//! only grow; there is no eviction and no way to retract an observation.

use std::collections::HashMap;
use textbayes_core::{Category, Token};

/// Mutable frequency model behind a classifier
#[derive(Debug, Clone, Default)]
pub struct FrequencyStore {
    /// Token -> category -> occurrence count
    token_counts: HashMap<Token, HashMap<Category, u64>>,

    /// Category -> number of training observations
    document_counts: HashMap<Category, u64>,
}

impl FrequencyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one training observation
    ///
    /// Every token occurrence is counted, so a token repeated in `tokens`
    /// adds more than one. The category's document count grows by exactly one.
    pub fn observe(&mut self, tokens: &[Token], category: &str) {
        for token in tokens {
            *self
                .token_counts
                .entry(token.clone())
                .or_default()
                .entry(category.to_string())
                .or_insert(0) += 1;
        }

        *self
            .document_counts
            .entry(category.to_string())
            .or_insert(0) += 1;
    }

    /// Occurrences of `token` in documents labeled `category`
    pub fn token_count(&self, token: &str, category: &str) -> u64 {
        self.token_counts
            .get(token)
            .and_then(|per_category| per_category.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of `token` across every category
    pub fn token_total(&self, token: &str) -> u64 {
        self.token_counts
            .get(token)
            .map(|per_category| per_category.values().sum())
            .unwrap_or(0)
    }

    /// Training observations labeled `category`
    pub fn document_count(&self, category: &str) -> u64 {
        self.document_counts.get(category).copied().unwrap_or(0)
    }

    /// Total number of training observations
    pub fn total_documents(&self) -> u64 {
        self.document_counts.values().sum()
    }

    /// Every known category, sorted by name
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.document_counts.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Number of known categories
    pub fn category_count(&self) -> usize {
        self.document_counts.len()
    }

    /// Number of distinct tokens seen in training
    pub fn vocabulary_size(&self) -> usize {
        self.token_counts.len()
    }

    /// Whether nothing has been trained yet
    pub fn is_empty(&self) -> bool {
        self.document_counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = FrequencyStore::new();

        assert!(store.is_empty());
        assert_eq!(store.total_documents(), 0);
        assert_eq!(store.token_count("dog", "Dog"), 0);
        assert_eq!(store.token_total("dog"), 0);
        assert_eq!(store.document_count("Dog"), 0);
        assert!(store.categories().is_empty());
    }

    #[test]
    fn test_observe_counts_occurrences_and_documents() {
        let mut store = FrequencyStore::new();
        store.observe(&tokens(&["black", "kitty", "kitty"]), "Cat");
        store.observe(&tokens(&["white", "kitten"]), "Cat");
        store.observe(&tokens(&["pointer"]), "Dog");

        assert_eq!(store.token_count("kitty", "Cat"), 2);
        assert_eq!(store.token_count("kitty", "Dog"), 0);
        assert_eq!(store.document_count("Cat"), 2);
        assert_eq!(store.document_count("Dog"), 1);
        assert_eq!(store.total_documents(), 3);
        assert_eq!(store.vocabulary_size(), 5);
        assert_eq!(store.categories(), vec!["Cat", "Dog"]);
    }

    #[test]
    fn test_token_total_spans_categories() {
        let mut store = FrequencyStore::new();
        store.observe(&tokens(&["fur"]), "Cat");
        store.observe(&tokens(&["fur", "fur"]), "Dog");

        assert_eq!(store.token_total("fur"), 3);
    }

    #[test]
    fn test_empty_document_still_counts() {
        let mut store = FrequencyStore::new();
        store.observe(&[], "Empty");

        assert_eq!(store.document_count("Empty"), 1);
        assert_eq!(store.vocabulary_size(), 0);
        assert_eq!(store.category_count(), 1);
    }
}
