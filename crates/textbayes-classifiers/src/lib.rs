//! textbayes Classifiers
//!
//! Naive Bayes text classification over a token frequency model.
//!
//! The pieces, leaf first:
//! - [`FrequencyStore`]: token×category occurrence counts and per-category
//!   document counts
//! - [`ProbabilityEngine`]: smoothed P(token | category) and category priors
//! - [`CategoryScorer`]: prior times the product of token probabilities
//! - [`ConcurrentAggregator`]: scores contiguous category partitions in
//!   parallel and merges them
//! - [`Ranker`]: picks the best category or reports that none qualifies
//!
//! [`NaiveBayesClassifier`] ties them together behind a reader/writer lock.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod naive;
pub mod probability;
pub mod ranker;
pub mod scorer;
pub mod store;

pub use aggregator::{ConcurrentAggregator, PartitionPlan};
pub use classifier::{ClassificationMetadata, ClassificationResult, TextClassifier};
pub use config::NaiveBayesConfig;
pub use naive::{ModelStats, NaiveBayesClassifier};
pub use probability::{ProbabilityEngine, Smoothing};
pub use ranker::{Ranker, ScoreReport};
pub use scorer::{CategoryScorer, ScoringMode};
pub use store::FrequencyStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, TextClassifier};
    pub use crate::config::NaiveBayesConfig;
    pub use crate::naive::NaiveBayesClassifier;
    pub use crate::ranker::ScoreReport;
    pub use crate::scorer::ScoringMode;
    pub use textbayes_core::{Error, Result, Tokenizer};
}
