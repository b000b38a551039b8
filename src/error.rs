//! Error types for lexalign.

use thiserror::Error;

/// Main error type for lexalign operations.
#[derive(Error, Debug)]
pub enum LexAlignError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Thesaurus error: {0}")]
    Thesaurus(#[from] ThesaurusError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised by a thesaurus backend.
#[derive(Error, Debug)]
pub enum ThesaurusError {
    #[error("Thesaurus unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while reading lexicons, alignments or synsets from text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Unknown lexical type: {0}")]
    UnknownLexicalType(String),
}

/// Result type alias for lexalign operations.
pub type Result<T> = std::result::Result<T, LexAlignError>;
