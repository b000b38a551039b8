//! Name-to-term lexicon with weights and provenance.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::text::normalize_name;
use super::types::{LexicalEntry, LexicalType, TermId};

/// Weight lost by a name for every additional term it also names.
const AMBIGUITY_PENALTY: f64 = 0.01;

/// Immutable mapping from names to the terms they denote.
///
/// A name may denote several terms and a term may have several names. Each
/// (name, term) pair carries a [`LexicalEntry`]. Lexicons are created with a
/// [`LexiconBuilder`]; extending an existing lexicon goes through
/// [`Lexicon::to_builder`], which never touches the original.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, HashMap<TermId, LexicalEntry>>,
    term_names: HashMap<TermId, HashSet<String>>,
}

impl Lexicon {
    /// Start an empty lexicon.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Independent, extendable copy of this lexicon.
    pub fn to_builder(&self) -> LexiconBuilder {
        LexiconBuilder {
            lexicon: self.clone(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&HashMap<TermId, LexicalEntry>> {
        self.entries
            .get(name)
            .or_else(|| self.entries.get(normalize_name(name).as_str()))
    }

    /// All names in the lexicon.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Whether the lexicon has `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Entries of `name`, keyed by term; `None` when the name is absent.
    pub fn entries(&self, name: &str) -> Option<&HashMap<TermId, LexicalEntry>> {
        self.lookup(name)
    }

    /// Terms denoted by `name`; `None` when the name is absent.
    pub fn terms(&self, name: &str) -> Option<HashSet<TermId>> {
        self.lookup(name).map(|terms| terms.keys().copied().collect())
    }

    /// Entry for the (name, term) pair.
    pub fn entry(&self, name: &str, term: TermId) -> Option<&LexicalEntry> {
        self.lookup(name).and_then(|terms| terms.get(&term))
    }

    /// Weight of `name` for `term`, or 0.0 if the pair is absent.
    pub fn weight(&self, name: &str, term: TermId) -> f64 {
        self.entry(name, term).map_or(0.0, |e| e.weight)
    }

    /// Weight of `name` for `term`, discounted by the number of other terms
    /// sharing the name. Never negative; 0.0 if the pair is absent.
    pub fn corrected_weight(&self, name: &str, term: TermId) -> f64 {
        let Some(terms) = self.lookup(name) else {
            return 0.0;
        };
        let Some(entry) = terms.get(&term) else {
            return 0.0;
        };
        let others = terms.len().saturating_sub(1) as f64;
        (entry.weight - AMBIGUITY_PENALTY * others).max(0.0)
    }

    /// Provenance of the (name, term) pair.
    pub fn source(&self, name: &str, term: TermId) -> Option<&str> {
        self.entry(name, term).map(|e| e.source.as_str())
    }

    /// Lexical type of the (name, term) pair.
    pub fn lexical_type(&self, name: &str, term: TermId) -> Option<LexicalType> {
        self.entry(name, term).map(|e| e.lexical_type)
    }

    /// Names of `term`; `None` when the term has no names.
    pub fn names_of(&self, term: TermId) -> Option<impl Iterator<Item = &str> + '_> {
        self.term_names
            .get(&term)
            .map(|names| names.iter().map(String::as_str))
    }

    /// Number of distinct names.
    pub fn name_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.term_names.len()
    }

    /// Number of (name, term) pairs.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`Lexicon`] values.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Add a (name, term) entry.
    ///
    /// The name is normalized first. If the pair already exists the entry
    /// with the higher weight is kept. Empty names and non-positive weights
    /// are ignored. Returns whether the lexicon changed.
    pub fn add(
        &mut self,
        term: TermId,
        name: &str,
        lexical_type: LexicalType,
        source: &str,
        weight: f64,
    ) -> bool {
        let name = normalize_name(name);
        if name.is_empty() || !(weight > 0.0) {
            return false;
        }
        let weight = weight.min(1.0);

        let terms = self.lexicon.entries.entry(name.clone()).or_default();
        match terms.entry(term) {
            Entry::Occupied(mut slot) => {
                if slot.get().weight >= weight {
                    return false;
                }
                slot.insert(LexicalEntry::new(lexical_type, source, weight));
            }
            Entry::Vacant(slot) => {
                slot.insert(LexicalEntry::new(lexical_type, source, weight));
            }
        }

        self.lexicon.term_names.entry(term).or_default().insert(name);
        true
    }


    /// Chaining form of [`LexiconBuilder::add`].
    pub fn with(
        mut self,
        term: TermId,
        name: &str,
        lexical_type: LexicalType,
        source: &str,
        weight: f64,
    ) -> Self {
        self.add(term, name, lexical_type, source, weight);
        self
    }

    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}
