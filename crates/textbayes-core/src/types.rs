//! Core types for textbayes

use std::collections::BTreeMap;

/// A feature produced by a tokenizer. The frequency model treats it as opaque.
pub type Token = String;

/// A training label supplied by the caller.
pub type Category = String;

/// Per-category scores, ordered by category name.
///
/// Ordered so that iteration, and therefore tie-breaking between equal
/// scores, is stable across runs.
pub type ScoreMap = BTreeMap<Category, f64>;
