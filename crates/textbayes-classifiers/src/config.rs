//! Configuration for the naive Bayes classifier

use crate::probability::Smoothing;
use crate::scorer::ScoringMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use textbayes_core::{Error, Result, TokenizerConfig};

/// Configuration for a [`NaiveBayesClassifier`](crate::NaiveBayesClassifier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesConfig {
    /// Number of contiguous category partitions scored in parallel
    #[serde(default = "default_partitions")]
    pub partitions: usize,

    /// Category counts below this are scored as a single partition
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Worker thread count; defaults to the number of CPUs
    #[serde(default)]
    pub worker_threads: Option<usize>,

    /// Smoothing applied to per-token probabilities
    #[serde(default)]
    pub smoothing: Smoothing,

    /// How per-token probabilities are combined
    #[serde(default)]
    pub scoring: ScoringMode,

    /// Settings for the default word tokenizer
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

fn default_partitions() -> usize {
    10
}

fn default_parallel_threshold() -> usize {
    10
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            partitions: default_partitions(),
            parallel_threshold: default_parallel_threshold(),
            worker_threads: None,
            smoothing: Smoothing::default(),
            scoring: ScoringMode::default(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl NaiveBayesConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::config(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Set the partition count
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Set the category count below which scoring is not split
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the worker thread count
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Set the scoring mode
    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the smoothing parameters
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Resolved worker thread count
    pub fn thread_count(&self) -> usize {
        self.worker_threads.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values the classifier cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(Error::config("partitions must be at least 1"));
        }

        if self.worker_threads == Some(0) {
            return Err(Error::config("worker_threads must be at least 1"));
        }

        let Smoothing {
            assumed_probability,
            weight,
        } = self.smoothing;

        if !(0.0..=1.0).contains(&assumed_probability) {
            return Err(Error::config(format!(
                "assumed_probability must be within [0, 1], got {}",
                assumed_probability
            )));
        }

        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::config(format!(
                "smoothing weight must be positive and finite, got {}",
                weight
            )));
        }

        Ok(())
    }
}
