//! Synonym-expansion matcher.
//!
//! Both lexicons are first extended with the thesaurus word forms of their
//! names, then matched on exact names. Only matches backed by at least one
//! thesaurus-derived entry are kept; matches between names both ontologies
//! already declared are left to plain name matching.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

use super::Matcher;
use crate::alignment::{Alignment, Mapping};
use crate::config::SynonymConfig;
use crate::error::Result;
use crate::ontology::{is_formula, normalize_name, LexicalType, Lexicon, Ontology};
use crate::thesaurus::Thesaurus;

/// Matcher extending lexicons with a thesaurus before exact-name matching.
pub struct SynonymMatcher {
    thesaurus: Arc<dyn Thesaurus>,
    /// Confidence of a name with a single synonym form.
    confidence: f64,
    /// Confidence lost per synonym form.
    penalty: f64,
    /// Provenance tag of thesaurus-derived entries.
    source: String,
}

/// Per-invocation memo of thesaurus answers, so a name present in both
/// lexicons is looked up once.
struct Lookups<'a> {
    thesaurus: &'a dyn Thesaurus,
    forms: HashMap<String, BTreeSet<String>>,
}

impl<'a> Lookups<'a> {
    fn new(thesaurus: &'a dyn Thesaurus) -> Self {
        Self {
            thesaurus,
            forms: HashMap::new(),
        }
    }

    fn get(&mut self, name: &str) -> Result<&BTreeSet<String>> {
        if !self.forms.contains_key(name) {
            let forms = self.thesaurus.synonym_forms(name)?;
            self.forms.insert(name.to_string(), forms);
        }
        Ok(&self.forms[name])
    }
}

impl SynonymMatcher {
    /// Create a synonym matcher with the default policy.
    pub fn new(thesaurus: Arc<dyn Thesaurus>) -> Self {
        Self::with_config(thesaurus, &SynonymConfig::default())
    }

    /// Create a synonym matcher from configuration.
    pub fn with_config(thesaurus: Arc<dyn Thesaurus>, config: &SynonymConfig) -> Self {
        Self {
            thesaurus,
            confidence: config.confidence,
            penalty: config.penalty,
            source: config.source.clone(),
        }
    }

    /// Confidence of an expansion that found `form_count` synonym forms.
    ///
    /// Names with many senses are ambiguous, so every form costs `penalty`.
    pub fn expansion_confidence(&self, form_count: usize) -> f64 {
        self.confidence - self.penalty * form_count as f64
    }

    /// Copy of `lexicon` extended with the synonym forms of its names.
    ///
    /// Formulas are never looked up. Forms are counted after normalization,
    /// so "Car" and "car" cost one penalty. A name is skipped when the thesaurus
    /// has nothing for it or its expansion confidence is below `threshold`;
    /// a term is skipped when its weighted confidence is.
    pub fn extend(&self, lexicon: &Lexicon, threshold: f64) -> Result<Lexicon> {
        self.extend_with(lexicon, threshold, &mut Lookups::new(self.thesaurus.as_ref()))
    }

    fn extend_with(
        &self,
        lexicon: &Lexicon,
        threshold: f64,
        lookups: &mut Lookups<'_>,
    ) -> Result<Lexicon> {
        let mut builder = lexicon.to_builder();
        let mut expanded = 0usize;
        let mut added = 0usize;

        for name in lexicon.names() {
            if is_formula(name) {
                continue;
            }
            // Spellings differing only in case or spacing are one name
            let forms: BTreeSet<String> = lookups
                .get(name)?
                .iter()
                .map(|form| normalize_name(form))
                .filter(|form| !form.is_empty())
                .collect();
            if forms.is_empty() {
                continue;
            }
            let confidence = self.expansion_confidence(forms.len());
            if confidence < threshold {
                continue;
            }
            let Some(entries) = lexicon.entries(name) else {
                continue;
            };

            expanded += 1;
            for (&term, entry) in entries {
                let weight = confidence * entry.weight;
                if weight < threshold {
                    continue;
                }
                for form in &forms {
                    if builder.add(term, form, LexicalType::ExternalMatch, &self.source, weight) {
                        added += 1;
                    }
                }
            }
        }

        debug!(
            thesaurus = self.thesaurus.name(),
            names = lexicon.name_count(),
            expanded,
            added,
            "Extended lexicon"
        );
        Ok(builder.build())
    }

    /// Match two extended lexicons on exact names.
    ///
    /// A (name, i, j) match counts only if the entry of `i` or the entry of
    /// `j` for that name comes from the thesaurus. Its similarity is the
    /// product of both corrected weights.
    pub fn match_lexicons(&self, source: &Lexicon, target: &Lexicon, threshold: f64) -> Vec<Mapping> {
        // Iterate the lexicon with fewer names
        let source_is_scanned = source.name_count() <= target.name_count();
        let (scanned, reference) = if source_is_scanned {
            (source, target)
        } else {
            (target, source)
        };

        let mut mappings = Vec::new();
        for name in scanned.names() {
            let Some(reference_entries) = reference.entries(name) else {
                continue;
            };
            let Some(scan_entries) = scanned.entries(name) else {
                continue;
            };

            for (&i, scan_entry) in scan_entries {
                let scan_weight = scanned.corrected_weight(name, i);
                for (&j, reference_entry) in reference_entries {
                    if !scan_entry.is_from(&self.source) && !reference_entry.is_from(&self.source)
                    {
                        continue;
                    }
                    let similarity = scan_weight * reference.corrected_weight(name, j);
                    if similarity < threshold {
                        continue;
                    }
                    mappings.push(if source_is_scanned {
                        Mapping::new(i, j, similarity)
                    } else {
                        Mapping::new(j, i, similarity)
                    });
                }
            }
        }
        mappings
    }

    fn extend_both(
        &self,
        source: &Ontology,
        target: &Ontology,
        threshold: f64,
    ) -> Result<(Lexicon, Lexicon)> {
        let mut lookups = Lookups::new(self.thesaurus.as_ref());
        let source_ext = self.extend_with(source.lexicon(), threshold, &mut lookups)?;
        let target_ext = self.extend_with(target.lexicon(), threshold, &mut lookups)?;
        Ok((source_ext, target_ext))
    }
}

impl Matcher for SynonymMatcher {
    fn name(&self) -> &str {
        "synonym"
    }

    fn match_ontologies(
        &self,
        source: &Arc<Ontology>,
        target: &Arc<Ontology>,
        threshold: f64,
    ) -> Result<Alignment> {
        let (source_ext, target_ext) = self.extend_both(source, target, threshold)?;

        let mut alignment = Alignment::new(Arc::clone(source), Arc::clone(target));
        alignment.add_all(self.match_lexicons(&source_ext, &target_ext, threshold));

        info!(
            matcher = self.name(),
            source = source.uri(),
            target = target.uri(),
            mappings = alignment.len(),
            "Synonym matching complete"
        );
        Ok(alignment)
    }

    fn extend_alignment(&self, alignment: &Alignment, threshold: f64) -> Result<Alignment> {
        let source = alignment.source();
        let target = alignment.target();
        // Every term is expanded; mapped terms are filtered afterwards
        let (source_ext, target_ext) = self.extend_both(source, target, threshold)?;

        let mut extension = Alignment::new(Arc::clone(source), Arc::clone(target));
        extension.add_all(
            self.match_lexicons(&source_ext, &target_ext, threshold)
                .into_iter()
                .filter(|m| !alignment.contains_conflict(m)),
        );

        info!(
            matcher = self.name(),
            existing = alignment.len(),
            mappings = extension.len(),
            "Synonym extension complete"
        );
        Ok(extension)
    }
}
