//! Smoothed token probabilities and category priors
//!
//! All quantities here are pure functions of a [`FrequencyStore`] snapshot.
//! The engine borrows the store, so it is only constructed while the caller
//! holds the store's read lock.

use crate::store::FrequencyStore;
use serde::{Deserialize, Serialize};

/// Blend of an assumed probability with observed evidence
///
/// With `evidence` total occurrences of a token, the weighted probability is
/// `(weight * assumed_probability + evidence * raw) / (weight + evidence)`.
/// A token never seen in training gets exactly `assumed_probability`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Smoothing {
    /// Probability assumed for a token with no evidence
    #[serde(default = "default_assumed_probability")]
    pub assumed_probability: f64,

    /// Pseudo-count given to the assumed probability
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_assumed_probability() -> f64 {
    0.5
}

fn default_weight() -> f64 {
    1.0
}

impl Smoothing {
    /// Create smoothing parameters
    pub fn new(assumed_probability: f64, weight: f64) -> Self {
        Self {
            assumed_probability,
            weight,
        }
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::new(default_assumed_probability(), default_weight())
    }
}

/// Derives probabilities from a frequency store
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEngine<'a> {
    store: &'a FrequencyStore,
    smoothing: Smoothing,
    total_documents: f64,
}

impl<'a> ProbabilityEngine<'a> {
    /// Create an engine over a store snapshot
    pub fn new(store: &'a FrequencyStore, smoothing: Smoothing) -> Self {
        Self {
            store,
            smoothing,
            total_documents: store.total_documents() as f64,
        }
    }

    /// Unsmoothed P(token | category)
    ///
    /// Zero when the category has no documents.
    pub fn conditional_raw(&self, token: &str, category: &str) -> f64 {
        let documents = self.store.document_count(category);
        if documents == 0 {
            return 0.0;
        }
        self.store.token_count(token, category) as f64 / documents as f64
    }

    /// Smoothed P(token | category)
    ///
    /// Evidence is the token's occurrence count across all categories.
    pub fn weighted(&self, token: &str, category: &str) -> f64 {
        let Smoothing {
            assumed_probability,
            weight,
        } = self.smoothing;

        let evidence = self.store.token_total(token) as f64;
        let raw = self.conditional_raw(token, category);

        (weight * assumed_probability + evidence * raw) / (weight + evidence)
    }

    /// P(category), the share of training observations labeled `category`
    ///
    /// Zero for an untrained store.
    pub fn category_prior(&self, category: &str) -> f64 {
        if self.total_documents == 0.0 {
            return 0.0;
        }
        self.store.document_count(category) as f64 / self.total_documents
    }
}
