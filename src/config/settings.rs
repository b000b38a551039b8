//! Configuration settings for lexalign.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub matching: MatchingConfig,
    pub synonym: SynonymConfig,
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let expanded = shellexpand::tilde(&path.as_ref().to_string_lossy()).into_owned();
        let content = std::fs::read_to_string(&expanded).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("lexalign.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("lexalign/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.matching.threshold.is_finite() || self.matching.threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "matching.threshold must be a non-negative number".to_string(),
            )
            .into());
        }

        if !(self.synonym.confidence > 0.0 && self.synonym.confidence <= 1.0) {
            return Err(
                ConfigError::Invalid("synonym.confidence must be in (0, 1]".to_string()).into(),
            );
        }

        if !self.synonym.penalty.is_finite() || self.synonym.penalty <= 0.0 {
            return Err(ConfigError::Invalid("synonym.penalty must be > 0".to_string()).into());
        }

        if self.synonym.source.trim().is_empty() {
            return Err(ConfigError::Invalid("synonym.source must not be empty".to_string()).into());
        }

        if self.cache.enabled && self.cache.max_entries == 0 {
            return Err(ConfigError::Invalid("cache.max_entries must be > 0".to_string()).into());
        }

        Ok(())
    }
}

/// Matching configuration shared by all strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity for a mapping to be emitted
    pub threshold: f64,
    /// Accumulate word evidence on the rayon thread pool
    pub parallel: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            parallel: false,
        }
    }
}

/// Synonym expansion policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymConfig {
    /// Confidence of an unambiguous thesaurus hit
    pub confidence: f64,
    /// Confidence lost per synonym form found
    pub penalty: f64,
    /// Provenance tag written on thesaurus-derived lexicon entries
    pub source: String,
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            confidence: 0.9,
            penalty: 0.01,
            source: "WordNet".to_string(),
        }
    }
}

/// Thesaurus lookup cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 10_000,
        }
    }
}
