//! Scored term-to-term correspondence.

use serde::{Deserialize, Serialize};

use crate::ontology::TermId;

/// A correspondence between a source term and a target term.
///
/// Mappings are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    source: TermId,
    target: TermId,
    similarity: f64,
}

impl Mapping {
    pub fn new(source: TermId, target: TermId, similarity: f64) -> Self {
        debug_assert!(
            (0.0..=1.0 + 1e-9).contains(&similarity),
            "similarity out of range: {similarity}"
        );
        Self {
            source,
            target,
            similarity,
        }
    }

    pub fn source(&self) -> TermId {
        self.source
    }

    pub fn target(&self) -> TermId {
        self.target
    }

    /// Similarity score in [0, 1].
    pub fn similarity(&self) -> f64 {
        self.similarity
    }
}

impl std::fmt::Display for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{:.4}", self.source, self.target, self.similarity)
    }
}
