//! Word-overlap matcher using a weighted Jaccard index.

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::evidence::EvidenceTable;
use super::Matcher;
use crate::alignment::{Alignment, Mapping};
use crate::config::MatchingConfig;
use crate::error::Result;
use crate::ontology::{Ontology, TermId, WordLexicon};

/// Matches terms by the informative words their names share.
///
/// Each shared word contributes `sqrt(EC_s(w) * w_s(w, i) * EC_t(w) * w_t(w, j))`
/// to the pair `(i, j)`; the summed evidence `E` is normalized as a weighted
/// Jaccard index, `E / (EC(i) + EC(j) - E)`.
///
/// Memory grows with the number of term pairs sharing at least one word,
/// which is quadratic in the worst case.
#[derive(Debug, Clone, Default)]
pub struct WordMatcher {
    parallel: bool,
}

/// A word present on both sides, with the terms carrying it on each side.
struct SharedWord<'a> {
    scan_ec: f64,
    scan_terms: &'a HashMap<TermId, f64>,
    reference_ec: f64,
    reference_terms: &'a HashMap<TermId, f64>,
}

impl WordMatcher {
    /// Create a sequential word matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word matcher from configuration.
    pub fn with_config(config: &MatchingConfig) -> Self {
        Self {
            parallel: config.parallel,
        }
    }

    /// Accumulate word evidence on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Match two word lexicons, returning mappings with similarity at least
    /// `threshold`, sorted by (source, target).
    pub fn match_word_lexicons(
        &self,
        source: &WordLexicon,
        target: &WordLexicon,
        threshold: f64,
    ) -> Vec<Mapping> {
        // Iterate the smaller vocabulary; the result does not depend on it
        let source_is_scanned = source.word_count() <= target.word_count();
        let (scanned, reference) = if source_is_scanned {
            (source, target)
        } else {
            (target, source)
        };

        let shared: Vec<SharedWord<'_>> = scanned
            .iter()
            .filter_map(|(word, scan_terms)| {
                reference.terms(word).map(|reference_terms| SharedWord {
                    scan_ec: scanned.word_ec(word),
                    scan_terms,
                    reference_ec: reference.word_ec(word),
                    reference_terms,
                })
            })
            .collect();

        let evidence = if self.parallel {
            shared
                .par_iter()
                .fold(EvidenceTable::new, |mut table, word| {
                    add_word_evidence(&mut table, word, source_is_scanned);
                    table
                })
                .reduce(EvidenceTable::new, EvidenceTable::merge)
        } else {
            let mut table = EvidenceTable::new();
            for word in &shared {
                add_word_evidence(&mut table, word, source_is_scanned);
            }
            table
        };

        debug!(
            shared_words = shared.len(),
            candidate_pairs = evidence.len(),
            parallel = self.parallel,
            "Accumulated word evidence"
        );

        let mut mappings: Vec<Mapping> = evidence
            .iter()
            .filter_map(|(s, t, e)| {
                let union = source.term_ec(s) + target.term_ec(t) - e;
                if union <= 0.0 {
                    return None;
                }
                let similarity = (e / union).min(1.0);
                (similarity >= threshold).then(|| Mapping::new(s, t, similarity))
            })
            .collect();
        mappings.sort_by_key(|m| (m.source(), m.target()));
        mappings
    }
}

fn add_word_evidence(
    table: &mut EvidenceTable,
    word: &SharedWord<'_>,
    source_is_scanned: bool,
) {
    for (&i, &scan_weight) in word.scan_terms {
        let scan_sim = word.scan_ec * scan_weight;
        if scan_sim <= 0.0 {
            continue;
        }
        for (&j, &reference_weight) in word.reference_terms {
            let reference_sim = word.reference_ec * reference_weight;
            if reference_sim <= 0.0 {
                continue;
            }
            let evidence = (scan_sim * reference_sim).sqrt();
            if source_is_scanned {
                table.add(i, j, evidence);
            } else {
                table.add(j, i, evidence);
            }
        }
    }
}

impl Matcher for WordMatcher {
    fn name(&self) -> &str {
        "word"
    }

    fn match_ontologies(
        &self,
        source: &Arc<Ontology>,
        target: &Arc<Ontology>,
        threshold: f64,
    ) -> Result<Alignment> {
        let source_words = WordLexicon::new(source.lexicon());
        let target_words = WordLexicon::new(target.lexicon());

        let mut alignment = Alignment::new(Arc::clone(source), Arc::clone(target));
        alignment.add_all(self.match_word_lexicons(&source_words, &target_words, threshold));

        info!(
            matcher = self.name(),
            source = source.uri(),
            target = target.uri(),
            mappings = alignment.len(),
            "Word matching complete"
        );
        Ok(alignment)
    }

    fn extend_alignment(&self, alignment: &Alignment, threshold: f64) -> Result<Alignment> {
        let source = alignment.source();
        let target = alignment.target();
        let source_words = WordLexicon::excluding(source.lexicon(), alignment.source_set());
        let target_words = WordLexicon::excluding(target.lexicon(), alignment.target_set());

        let mut extension = Alignment::new(Arc::clone(source), Arc::clone(target));
        extension.add_all(self.match_word_lexicons(&source_words, &target_words, threshold));

        info!(
            matcher = self.name(),
            existing = alignment.len(),
            mappings = extension.len(),
            "Word extension complete"
        );
        Ok(extension)
    }
}
