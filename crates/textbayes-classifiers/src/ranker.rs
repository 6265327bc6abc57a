//! Picking the best category from merged scores

use crate::scorer::ScoringMode;
use serde::{Deserialize, Serialize};
use textbayes_core::{Category, ScoreMap};

/// Scores for every category plus the winner
///
/// When no category beats the sentinel, `scores` is empty and `best` is
/// `None`. The empty string is a valid category name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Score per category
    pub scores: ScoreMap,

    /// Highest-scoring category, if any beat the sentinel
    pub best: Option<Category>,
}

impl ScoreReport {
    /// Report with no match
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a category was matched
    pub fn is_classified(&self) -> bool {
        self.best.is_some()
    }

    /// Score of the best category
    pub fn best_score(&self) -> Option<f64> {
        self.best
            .as_ref()
            .and_then(|best| self.scores.get(best))
            .copied()
    }
}

/// Orders category scores and selects the best match
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    mode: ScoringMode,
}

impl Ranker {
    /// Create a ranker for scores produced in `mode`
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    /// Highest-scoring category strictly above the sentinel
    ///
    /// Scores are visited in category-name order and only a strictly greater
    /// score replaces the current winner, so ties go to the lexicographically
    /// smallest category.
    pub fn best<'a>(&self, scores: &'a ScoreMap) -> Option<(&'a str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        let mut max = self.mode.sentinel();

        for (category, &score) in scores {
            if score > max {
                max = score;
                best = Some((category.as_str(), score));
            }
        }

        best
    }

    /// Every category sorted by descending score, ties by name
    pub fn rank(&self, scores: &ScoreMap) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> = scores
            .iter()
            .map(|(category, &score)| (category.clone(), score))
            .collect();

        // stable: equal scores stay in name order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Turn merged scores into a report
    pub fn report(&self, scores: ScoreMap) -> ScoreReport {
        match self.best(&scores) {
            Some((best, _)) => {
                let best = Some(best.to_string());
                ScoreReport { scores, best }
            }
            None => ScoreReport::empty(),
        }
    }
}
