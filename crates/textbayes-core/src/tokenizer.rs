//! Tokenizers that turn raw text into classifier features
//!
//! Classifiers only depend on the [`Tokenizer`] trait. Two implementations are
//! provided:
//! - [`WordTokenizer`]: regex word extraction with optional lowercasing,
//!   minimum length and stop-word filtering
//! - [`WhitespaceTokenizer`]: splits on whitespace and keeps text verbatim
//!
//! Token order does not matter to the frequency model, but duplicates do: a
//! word appearing twice yields two tokens.

use crate::error::{Error, Result};
use crate::types::Token;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

const WORD_PATTERN: &str = r"\w+";

/// Trait for all tokenizers
pub trait Tokenizer: Send + Sync {
    /// Split the given text into tokens
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Read the whole stream and tokenize it
    ///
    /// Read failures are returned before any tokenization happens.
    fn tokenize_reader(&self, reader: &mut dyn Read) -> Result<Vec<Token>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.tokenize(&text)
    }

    /// Get the tokenizer name
    fn name(&self) -> &str;
}

/// Settings for [`WordTokenizer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Lowercase tokens before counting
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Tokens shorter than this many characters are dropped
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,

    /// Tokens to drop entirely (matched after lowercasing)
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_lowercase() -> bool {
    true
}

fn default_min_token_length() -> usize {
    1
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: default_lowercase(),
            min_token_length: default_min_token_length(),
            stop_words: Vec::new(),
        }
    }
}

/// Regex-based word tokenizer
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
    lowercase: bool,
    min_token_length: usize,
    stop_words: HashSet<String>,
}

impl WordTokenizer {
    /// Create a lowercasing word tokenizer with no stop words
    pub fn new() -> Result<Self> {
        Self::from_config(&TokenizerConfig::default())
    }

    /// Create a word tokenizer from configuration
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN)
            .map_err(|e| Error::config(format!("Failed to build word pattern: {}", e)))?;

        let stop_words = config
            .stop_words
            .iter()
            .map(|w| if config.lowercase { w.to_lowercase() } else { w.clone() })
            .collect();

        Ok(Self {
            pattern,
            lowercase: config.lowercase,
            min_token_length: config.min_token_length,
            stop_words,
        })
    }

    /// Add stop words on top of the configured ones
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            let word = if self.lowercase { word.to_lowercase() } else { word };
            self.stop_words.insert(word);
        }
        self
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_length && !self.stop_words.contains(token)
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Failed to create word tokenizer")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self
            .pattern
            .find_iter(text)
            .map(|m| {
                if self.lowercase {
                    m.as_str().to_lowercase()
                } else {
                    m.as_str().to_string()
                }
            })
            .filter(|token| self.keep(token))
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// Tokenizer that splits on whitespace only
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer_lowercases_and_strips_punctuation() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("German Shepherd, good dog!").unwrap();

        assert_eq!(tokens, vec!["german", "shepherd", "good", "dog"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_duplicates() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("kitty kitty Kitty").unwrap();

        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t == "kitty"));
    }

    #[test]
    fn test_word_tokenizer_config() {
        let config = TokenizerConfig {
            lowercase: false,
            min_token_length: 3,
            stop_words: vec!["The".to_string()],
        };
        let tokenizer = WordTokenizer::from_config(&config).unwrap();
        let tokens = tokenizer.tokenize("The Cat is on a mat").unwrap();

        assert_eq!(tokens, vec!["Cat", "mat"]);
    }

    #[test]
    fn test_word_tokenizer_extra_stop_words() {
        let tokenizer = WordTokenizer::new().unwrap().with_stop_words(["A", "the"]);
        let tokens = tokenizer.tokenize("A dog and the cat").unwrap();

        assert_eq!(tokens, vec!["dog", "and", "cat"]);
    }

    #[test]
    fn test_tokenize_reader() {
        let tokenizer = WordTokenizer::new().unwrap();
        let mut reader = std::io::Cursor::new("White kitten");
        let tokens = tokenizer.tokenize_reader(&mut reader).unwrap();

        assert_eq!(tokens, vec!["white", "kitten"]);
    }

    #[test]
    fn test_tokenize_reader_propagates_read_errors() {
        struct BrokenReader;

        impl Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let tokenizer = WordTokenizer::new().unwrap();
        let result = tokenizer.tokenize_reader(&mut BrokenReader);

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("  Black\tkitty!\n").unwrap();

        assert_eq!(tokens, vec!["Black", "kitty!"]);
        assert_eq!(tokenizer.name(), "whitespace");
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("?!, ...").unwrap().is_empty());
    }
}
