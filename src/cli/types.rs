//! CLI response types for the match and words commands.
//!
//! These types are serialized as-is for `--json` output.

use lexalign::{Mapping, MatcherKind};
use serde::{Deserialize, Serialize};

/// Result of the match command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub strategy: MatcherKind,
    pub source: String,
    pub target: String,
    pub threshold: f64,
    /// Size of the alignment that was extended, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<usize>,
    /// Mappings, highest similarity first.
    pub mappings: Vec<Mapping>,
}

/// One informative word of a lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub ec: f64,
    pub terms: usize,
}

/// Result of the words command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResult {
    pub lexicon: String,
    pub word_count: usize,
    pub term_count: usize,
    pub words: Vec<WordScore>,
}
