//! Core types for ontology lexicons.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Opaque handle of a term (class) in an ontology's term space.
pub type TermId = u32;

// ============================================================================
// Lexical Types
// ============================================================================

/// The kind of lexical entry a name is for a term.
///
/// Each kind carries a default weight used when the name is added without
/// an explicit one, reflecting how much the name can be trusted to denote
/// the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalType {
    /// Local name taken from the term's identifier.
    LocalName,
    /// Primary label.
    Label,
    /// Synonym declared as exact.
    ExactSynonym,
    /// Broad, narrow or related synonym.
    OtherSynonym,
    /// Structured expression (chemical formula and the like).
    Formula,
    /// Name obtained from an external knowledge source.
    ExternalMatch,
}

impl LexicalType {
    /// Default weight of a name of this type.
    pub fn default_weight(&self) -> f64 {
        match self {
            LexicalType::LocalName => 1.0,
            LexicalType::Label => 0.95,
            LexicalType::ExactSynonym => 0.9,
            LexicalType::OtherSynonym => 0.85,
            LexicalType::Formula => 0.8,
            LexicalType::ExternalMatch => 0.7,
        }
    }

    /// Get the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalType::LocalName => "local_name",
            LexicalType::Label => "label",
            LexicalType::ExactSynonym => "exact_synonym",
            LexicalType::OtherSynonym => "other_synonym",
            LexicalType::Formula => "formula",
            LexicalType::ExternalMatch => "external_match",
        }
    }
}

impl std::str::FromStr for LexicalType {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local_name" | "localname" => Ok(LexicalType::LocalName),
            "label" => Ok(LexicalType::Label),
            "exact_synonym" | "exactsynonym" => Ok(LexicalType::ExactSynonym),
            "other_synonym" | "othersynonym" => Ok(LexicalType::OtherSynonym),
            "formula" => Ok(LexicalType::Formula),
            "external_match" | "externalmatch" => Ok(LexicalType::ExternalMatch),
            other => Err(LoadError::UnknownLexicalType(other.to_string())),
        }
    }
}

impl std::fmt::Display for LexicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Lexical Entries
// ============================================================================

/// Attributes of a (name, term) pair in a lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Kind of name.
    pub lexical_type: LexicalType,
    /// Provenance; empty for names declared by the ontology itself.
    pub source: String,
    /// Trust in the name, in (0, 1].
    pub weight: f64,
}

impl LexicalEntry {
    pub fn new(lexical_type: LexicalType, source: impl Into<String>, weight: f64) -> Self {
        Self {
            lexical_type,
            source: source.into(),
            weight,
        }
    }

    /// Whether the entry was contributed by the given provenance.
    pub fn is_from(&self, source: &str) -> bool {
        self.source == source
    }
}
