//! Classifier trait and common types

use std::io::Read;
use textbayes_core::{Category, Result};

/// Trait for trainable text classifiers
///
/// Training and classification are synchronous. Implementations must be safe
/// to share between threads: concurrent classifications may run together,
/// and training never interleaves with an in-flight classification.
pub trait TextClassifier: Send + Sync {
    /// Learn that `text` belongs to `category`
    fn train(&self, text: &str, category: &str) -> Result<()>;

    /// Learn from a reader's full contents
    fn train_reader(&self, reader: &mut dyn Read, category: &str) -> Result<()>;

    /// Best category for `text`, or [`Error::NotClassified`](textbayes_core::Error::NotClassified)
    fn classify(&self, text: &str) -> Result<Category>;

    /// Best category for a reader's full contents
    fn classify_reader(&self, reader: &mut dyn Read) -> Result<Category>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Best category
    pub label: String,

    /// Score of the best category (unnormalized)
    pub score: f64,

    /// Additional metadata
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Check if score exceeds threshold
    pub fn exceeds_threshold(&self, threshold: f64) -> bool {
        self.score >= threshold
    }

    /// Gap between the best and the runner-up score, when there is one
    pub fn margin(&self) -> Option<f64> {
        let all_scores = self.metadata.all_scores.as_ref()?;
        let runner_up = all_scores.get(1)?;
        Some(self.score - runner_up.1)
    }
}

/// Metadata about classification
#[derive(Debug, Clone, Default)]
pub struct ClassificationMetadata {
    /// Model name
    pub model: Option<String>,

    /// All category scores, best first
    pub all_scores: Option<Vec<(String, f64)>>,

    /// Number of tokens the document produced
    pub token_count: usize,
}
