//! Naive Bayes text classifier
//!
//! Owns a [`FrequencyStore`] behind a reader/writer lock. Training takes the
//! write lock for the count update; every read path holds the read lock for
//! its whole duration, including the parallel scoring fan-out, so training
//! never interleaves with an in-flight classification.

use crate::aggregator::ConcurrentAggregator;
use crate::classifier::{ClassificationMetadata, ClassificationResult, TextClassifier};
use crate::config::NaiveBayesConfig;
use crate::probability::{ProbabilityEngine, Smoothing};
use crate::ranker::{Ranker, ScoreReport};
use crate::scorer::{CategoryScorer, ScoringMode};
use crate::store::FrequencyStore;
use parking_lot::RwLock;
use std::io::Read;
use std::sync::Arc;
use std::time::Instant;
use textbayes_core::{Category, Error, Result, Token, Tokenizer, WordTokenizer};
use tracing::{debug, info, warn};

const MODEL_NAME: &str = "naive-bayes";

/// Snapshot of the learned model's size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
    /// Known categories
    pub categories: usize,

    /// Training observations
    pub documents: u64,

    /// Distinct tokens seen
    pub vocabulary: usize,
}

/// Naive Bayes classifier with parallel category scoring
pub struct NaiveBayesClassifier {
    name: String,
    store: RwLock<FrequencyStore>,
    tokenizer: Arc<dyn Tokenizer>,
    smoothing: Smoothing,
    scoring: ScoringMode,
    ranker: Ranker,
    aggregator: ConcurrentAggregator,
}

impl NaiveBayesClassifier {
    /// Create a classifier with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(NaiveBayesConfig::default())
    }

    /// Create a classifier from configuration
    ///
    /// Each classifier builds its own scoring pool with
    /// `worker_threads` threads, or one per CPU when unset. Set
    /// `worker_threads` when many classifiers live in one process.
    pub fn with_config(config: NaiveBayesConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = Arc::new(WordTokenizer::from_config(&config.tokenizer)?);
        let aggregator = ConcurrentAggregator::from_config(&config)?;

        info!(
            partitions = aggregator.partitions(),
            threads = aggregator.threads(),
            scoring = ?config.scoring,
            "Created naive Bayes classifier"
        );

        Ok(Self {
            name: MODEL_NAME.to_string(),
            store: RwLock::new(FrequencyStore::new()),
            tokenizer,
            smoothing: config.smoothing,
            scoring: config.scoring,
            ranker: Ranker::new(config.scoring),
            aggregator,
        })
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Rename the classifier
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Learn that `text` belongs to `category`
    ///
    /// Tokenizer errors are returned before the store is touched.
    pub fn train(&self, text: &str, category: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.record(&tokens, category);
        Ok(())
    }

    /// Learn from a reader's full contents
    pub fn train_reader<R: Read>(&self, mut reader: R, category: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize_reader(&mut reader)?;
        self.record(&tokens, category);
        Ok(())
    }

    fn record(&self, tokens: &[Token], category: &str) {
        if tokens.is_empty() {
            warn!(category, "Training document produced no tokens; only the prior changes");
        }

        let mut store = self.store.write();
        store.observe(tokens, category);

        debug!(
            category,
            tokens = tokens.len(),
            documents = store.document_count(category),
            "Recorded training observation"
        );
    }

    /// Score every known category for `text`
    ///
    /// Returns an empty report instead of failing when nothing scores above
    /// the sentinel.
    pub fn score_all(&self, text: &str) -> Result<ScoreReport> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(self.score_tokens(&tokens))
    }

    /// Score every known category for a reader's full contents
    pub fn score_all_reader<R: Read>(&self, mut reader: R) -> Result<ScoreReport> {
        let tokens = self.tokenizer.tokenize_reader(&mut reader)?;
        Ok(self.score_tokens(&tokens))
    }

    fn score_tokens(&self, tokens: &[Token]) -> ScoreReport {
        let store = self.store.read();
        let engine = ProbabilityEngine::new(&store, self.smoothing);
        let scorer = CategoryScorer::new(engine, self.scoring);
        let categories = store.categories();

        let scores = self.aggregator.score_all(&scorer, &categories, tokens);
        self.ranker.report(scores)
    }

    /// Best category for `text`
    pub fn classify(&self, text: &str) -> Result<Category> {
        let report = self.score_all(text)?;
        Self::best_of(report)
    }

    /// Best category for a reader's full contents
    pub fn classify_reader<R: Read>(&self, reader: R) -> Result<Category> {
        let report = self.score_all_reader(reader)?;
        Self::best_of(report)
    }

    fn best_of(report: ScoreReport) -> Result<Category> {
        report.best.ok_or_else(|| {
            debug!("No category scored above the sentinel");
            Error::NotClassified
        })
    }

    /// Best category with its score, every ranked score and timing
    pub fn classify_detailed(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let tokens = self.tokenizer.tokenize(text)?;
        let report = self.score_tokens(&tokens);
        let score = report.best_score();
        let all_scores = self.ranker.rank(&report.scores);
        let label = Self::best_of(report)?;

        Ok(ClassificationResult {
            label,
            score: score.unwrap_or_else(|| self.scoring.sentinel()),
            metadata: ClassificationMetadata {
                model: Some(self.name.clone()),
                all_scores: Some(all_scores),
                token_count: tokens.len(),
            },
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    /// Every category for `text`, best first
    ///
    /// Empty when nothing scores above the sentinel.
    pub fn rank(&self, text: &str) -> Result<Vec<(Category, f64)>> {
        let report = self.score_all(text)?;
        Ok(self.ranker.rank(&report.scores))
    }

    /// Unsmoothed P(token | category)
    pub fn conditional_probability(&self, token: &str, category: &str) -> f64 {
        let store = self.store.read();
        ProbabilityEngine::new(&store, self.smoothing).conditional_raw(token, category)
    }

    /// Smoothed P(token | category)
    pub fn weighted_probability(&self, token: &str, category: &str) -> f64 {
        let store = self.store.read();
        ProbabilityEngine::new(&store, self.smoothing).weighted(token, category)
    }

    /// P(category)
    pub fn category_prior(&self, category: &str) -> f64 {
        let store = self.store.read();
        ProbabilityEngine::new(&store, self.smoothing).category_prior(category)
    }

    /// Known categories, sorted by name
    pub fn categories(&self) -> Vec<Category> {
        self.store
            .read()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Training observations labeled `category`
    pub fn document_count(&self, category: &str) -> u64 {
        self.store.read().document_count(category)
    }

    /// Total training observations
    pub fn total_documents(&self) -> u64 {
        self.store.read().total_documents()
    }

    /// Distinct tokens seen in training
    pub fn vocabulary_size(&self) -> usize {
        self.store.read().vocabulary_size()
    }

    /// Size of the learned model
    pub fn stats(&self) -> ModelStats {
        let store = self.store.read();
        ModelStats {
            categories: store.category_count(),
            documents: store.total_documents(),
            vocabulary: store.vocabulary_size(),
        }
    }

    /// Scoring mode in use
    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring
    }

    /// Name of the tokenizer in use
    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new().expect("Failed to create naive Bayes classifier")
    }
}

impl TextClassifier for NaiveBayesClassifier {
    fn train(&self, text: &str, category: &str) -> Result<()> {
        NaiveBayesClassifier::train(self, text, category)
    }

    fn train_reader(&self, reader: &mut dyn Read, category: &str) -> Result<()> {
        NaiveBayesClassifier::train_reader(self, reader, category)
    }

    fn classify(&self, text: &str) -> Result<Category> {
        NaiveBayesClassifier::classify(self, text)
    }

    fn classify_reader(&self, reader: &mut dyn Read) -> Result<Category> {
        NaiveBayesClassifier::classify_reader(self, reader)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> NaiveBayesClassifier {
        let classifier = NaiveBayesClassifier::new().unwrap();
        classifier.train("German Shepherd", "Dog").unwrap();
        classifier.train("Pointer", "Dog").unwrap();
        classifier.train("Black kitty", "Cat").unwrap();
        classifier.train("White kitten", "Cat").unwrap();
        classifier
    }

    #[test]
    fn test_kitty_is_a_cat() {
        let classifier = pets();
        let report = classifier.score_all("Kitty").unwrap();

        assert_eq!(report.best.as_deref(), Some("Cat"));
        assert!(report.scores["Cat"] > report.scores["Dog"]);
        assert_eq!(report.scores["Cat"], 0.25);
        assert_eq!(report.scores["Dog"], 0.125);
        assert_eq!(classifier.classify("Kitty").unwrap(), "Cat");
    }

    #[test]
    fn test_untrained_is_not_classified() {
        let classifier = NaiveBayesClassifier::new().unwrap();

        let err = classifier.classify("anything at all").unwrap_err();
        assert!(err.is_not_classified());

        let report = classifier.score_all("anything at all").unwrap();
        assert!(report.scores.is_empty());
        assert_eq!(report.best, None);
    }

    #[test]
    fn test_reader_entry_points() {
        let classifier = NaiveBayesClassifier::new().unwrap();
        classifier
            .train_reader(std::io::Cursor::new("Black kitty"), "Cat")
            .unwrap();
        classifier
            .train_reader("Pointer".as_bytes(), "Dog")
            .unwrap();

        let category = classifier
            .classify_reader(std::io::Cursor::new("kitty"))
            .unwrap();
        assert_eq!(category, "Cat");
    }

    #[test]
    fn test_classify_detailed() {
        let classifier = pets();
        let result = classifier.classify_detailed("Kitty").unwrap();

        assert_eq!(result.label, "Cat");
        assert_eq!(result.score, 0.25);
        assert_eq!(result.metadata.token_count, 1);
        assert_eq!(result.metadata.model.as_deref(), Some("naive-bayes"));
        assert_eq!(result.margin(), Some(0.125));

        let all_scores = result.metadata.all_scores.unwrap();
        assert_eq!(all_scores[0].0, "Cat");
        assert_eq!(all_scores[1].0, "Dog");
    }

    #[test]
    fn test_rank() {
        let classifier = pets();
        let ranked = classifier.rank("black kitty").unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, "Cat");
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn test_introspection() {
        let classifier = pets();

        assert_eq!(classifier.categories(), vec!["Cat", "Dog"]);
        assert_eq!(classifier.document_count("Dog"), 2);
        assert_eq!(classifier.total_documents(), 4);
        assert_eq!(classifier.vocabulary_size(), 7);
        assert_eq!(classifier.category_prior("Cat"), 0.5);
        assert_eq!(classifier.conditional_probability("kitty", "Cat"), 0.5);
        assert_eq!(classifier.weighted_probability("parrot", "Cat"), 0.5);
        assert_eq!(
            classifier.stats(),
            ModelStats {
                categories: 2,
                documents: 4,
                vocabulary: 7,
            }
        );
    }

    #[test]
    fn test_log_space_agrees_on_winner() {
        let config = NaiveBayesConfig::default().with_scoring(ScoringMode::LogSpace);
        let classifier = NaiveBayesClassifier::with_config(config).unwrap();
        classifier.train("German Shepherd", "Dog").unwrap();
        classifier.train("Pointer", "Dog").unwrap();
        classifier.train("Black kitty", "Cat").unwrap();
        classifier.train("White kitten", "Cat").unwrap();

        let report = classifier.score_all("Kitty").unwrap();
        assert_eq!(report.best.as_deref(), Some("Cat"));
        assert!((report.scores["Cat"] - 0.25f64.ln()).abs() < 1e-12);
        assert_eq!(classifier.scoring_mode(), ScoringMode::LogSpace);
    }

    #[test]
    fn test_trait_object() {
        let classifier: Box<dyn TextClassifier> = Box::new(pets().with_name("pets"));

        assert_eq!(classifier.name(), "pets");
        assert_eq!(classifier.classify("white kitten").unwrap(), "Cat");

        let mut reader = std::io::Cursor::new("german pointer");
        assert_eq!(classifier.classify_reader(&mut reader).unwrap(), "Dog");
    }
}
