//! Per-category document scores
//!
//! Tokens are treated as conditionally independent given the category, so a
//! document's score is the category prior times the product of the weighted
//! probability of every token occurrence.
//!
//! In [`ScoringMode::Product`] nothing is log-transformed. Long documents or
//! very rare tokens can underflow the product to zero, in which case the
//! category can no longer win. [`ScoringMode::LogSpace`] sums logarithms
//! instead; its scores are not comparable with product scores.

use crate::probability::ProbabilityEngine;
use serde::{Deserialize, Serialize};
use textbayes_core::Token;

/// How per-token probabilities are combined into a category score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// `prior * Π weighted`
    #[default]
    Product,

    /// `ln(prior) + Σ ln(weighted)`
    LogSpace,
}

impl ScoringMode {
    /// Score a category must beat to be reported as a match
    pub fn sentinel(&self) -> f64 {
        match self {
            Self::Product => 0.0,
            Self::LogSpace => f64::NEG_INFINITY,
        }
    }
}

/// Scores a tokenized document against one category at a time
#[derive(Debug, Clone, Copy)]
pub struct CategoryScorer<'a> {
    engine: ProbabilityEngine<'a>,
    mode: ScoringMode,
}

impl<'a> CategoryScorer<'a> {
    /// Create a scorer
    pub fn new(engine: ProbabilityEngine<'a>, mode: ScoringMode) -> Self {
        Self { engine, mode }
    }

    /// Unnormalized score of `tokens` for `category`
    ///
    /// Repeated tokens contribute once per occurrence.
    pub fn score(&self, tokens: &[Token], category: &str) -> f64 {
        let prior = self.engine.category_prior(category);

        match self.mode {
            ScoringMode::Product => tokens
                .iter()
                .fold(prior, |acc, token| acc * self.engine.weighted(token, category)),
            ScoringMode::LogSpace => tokens.iter().fold(prior.ln(), |acc, token| {
                acc + self.engine.weighted(token, category).ln()
            }),
        }
    }
}
