//! textbayes Core
//!
//! Core types, traits, and utilities shared across textbayes components.
//!
//! This crate provides:
//! - Error types and result handling
//! - Token and category aliases used by the frequency model
//! - The `Tokenizer` trait consumed by classifiers
//! - Default word and whitespace tokenizers

pub mod error;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};
pub use tokenizer::{Tokenizer, TokenizerConfig, WhitespaceTokenizer, WordTokenizer};
pub use types::{Category, ScoreMap, Token};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
    pub use crate::types::{Category, ScoreMap, Token};
}
