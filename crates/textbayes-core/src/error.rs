//! Error types for textbayes

/// Result type alias using textbayes' Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for textbayes operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tokenizer failures, passed through to the caller unchanged
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// No category could be assigned a positive score
    #[error("unable to classify document")]
    NotClassified,

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Reader/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new tokenizer error
    pub fn tokenizer(msg: impl Into<String>) -> Self {
        Self::Tokenizer(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this is the not-classified sentinel
    pub fn is_not_classified(&self) -> bool {
        matches!(self, Self::NotClassified)
    }
}
