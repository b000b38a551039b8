//! Alignments: collections of mappings between two ontologies.

mod mapping;

pub use mapping::Mapping;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::ontology::{Ontology, TermId};

/// Ordered set of [`Mapping`]s between a fixed pair of ontologies.
///
/// Holds at most one mapping per (source, target) pair and keeps track of
/// which source and target terms are already mapped, so candidate mappings
/// can be checked for conflicts in constant time.
#[derive(Debug, Clone)]
pub struct Alignment {
    source: Arc<Ontology>,
    target: Arc<Ontology>,
    mappings: Vec<Mapping>,
    index: HashMap<(TermId, TermId), usize>,
    sources: Vec<TermId>,
    targets: Vec<TermId>,
    source_set: HashSet<TermId>,
    target_set: HashSet<TermId>,
}

impl Alignment {
    /// Create an empty alignment between `source` and `target`.
    pub fn new(source: Arc<Ontology>, target: Arc<Ontology>) -> Self {
        Self {
            source,
            target,
            mappings: Vec::new(),
            index: HashMap::new(),
            sources: Vec::new(),
            targets: Vec::new(),
            source_set: HashSet::new(),
            target_set: HashSet::new(),
        }
    }

    pub fn source(&self) -> &Arc<Ontology> {
        &self.source
    }

    pub fn target(&self) -> &Arc<Ontology> {
        &self.target
    }

    /// Add a mapping.
    ///
    /// If the pair is already present the higher similarity is kept.
    /// Returns whether the alignment changed.
    pub fn add(&mut self, mapping: Mapping) -> bool {
        let key = (mapping.source(), mapping.target());
        if let Some(&pos) = self.index.get(&key) {
            if self.mappings[pos].similarity() >= mapping.similarity() {
                return false;
            }
            self.mappings[pos] = mapping;
            return true;
        }

        self.index.insert(key, self.mappings.len());
        self.mappings.push(mapping);
        if self.source_set.insert(mapping.source()) {
            self.sources.push(mapping.source());
        }
        if self.target_set.insert(mapping.target()) {
            self.targets.push(mapping.target());
        }
        true
    }

    /// Add every mapping; returns how many changed the alignment.
    pub fn add_all(&mut self, mappings: impl IntoIterator<Item = Mapping>) -> usize {
        mappings.into_iter().filter(|&m| self.add(m)).count()
    }

    /// Mapped source terms, in order of first appearance.
    pub fn sources(&self) -> &[TermId] {
        &self.sources
    }

    /// Mapped target terms, in order of first appearance.
    pub fn targets(&self) -> &[TermId] {
        &self.targets
    }

    /// Mapped source terms as a set.
    pub fn source_set(&self) -> &HashSet<TermId> {
        &self.source_set
    }

    /// Mapped target terms as a set.
    pub fn target_set(&self) -> &HashSet<TermId> {
        &self.target_set
    }

    pub fn contains_source(&self, term: TermId) -> bool {
        self.source_set.contains(&term)
    }

    pub fn contains_target(&self, term: TermId) -> bool {
        self.target_set.contains(&term)
    }

    /// Whether the (source, target) pair is mapped.
    pub fn contains(&self, source: TermId, target: TermId) -> bool {
        self.index.contains_key(&(source, target))
    }

    pub fn get(&self, source: TermId, target: TermId) -> Option<&Mapping> {
        self.index
            .get(&(source, target))
            .map(|&pos| &self.mappings[pos])
    }

    /// Whether the source or the target of `mapping` is already mapped.
    pub fn contains_conflict(&self, mapping: &Mapping) -> bool {
        self.contains_source(mapping.source()) || self.contains_target(mapping.target())
    }

    /// Sort by descending similarity, ties by (source, target).
    pub fn sort_by_similarity(&mut self) {
        self.mappings.sort_by(|a, b| {
            b.similarity()
                .partial_cmp(&a.similarity())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| (a.source(), a.target()).cmp(&(b.source(), b.target())))
        });
        self.index = self
            .mappings
            .iter()
            .enumerate()
            .map(|(pos, m)| ((m.source(), m.target()), pos))
            .collect();
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::Lexicon;

    fn empty_alignment() -> Alignment {
        let source = Arc::new(Ontology::new("http://example.org/a", Lexicon::default()));
        let target = Arc::new(Ontology::new("http://example.org/b", Lexicon::default()));
        Alignment::new(source, target)
    }

    #[test]
    fn test_add_tracks_sources_and_targets() {
        let mut a = empty_alignment();
        assert!(a.add(Mapping::new(1, 10, 0.9)));
        assert!(a.add(Mapping::new(2, 10, 0.7)));
        assert!(a.add(Mapping::new(1, 11, 0.6)));

        assert_eq!(a.len(), 3);
        assert_eq!(a.sources(), &[1, 2]);
        assert_eq!(a.targets(), &[10, 11]);
        assert!(a.contains(2, 10));
        assert!(!a.contains(2, 11));
    }

    #[test]
    fn test_duplicate_pair_keeps_best_similarity() {
        let mut a = empty_alignment();
        a.add(Mapping::new(1, 10, 0.7));
        assert!(!a.add(Mapping::new(1, 10, 0.5)));
        assert!(a.add(Mapping::new(1, 10, 0.8)));

        assert_eq!(a.len(), 1);
        assert_eq!(a.get(1, 10).unwrap().similarity(), 0.8);
    }

    #[test]
    fn test_contains_conflict() {
        let mut a = empty_alignment();
        a.add(Mapping::new(1, 10, 0.9));

        assert!(a.contains_conflict(&Mapping::new(1, 99, 0.5)));
        assert!(a.contains_conflict(&Mapping::new(99, 10, 0.5)));
        assert!(!a.contains_conflict(&Mapping::new(2, 20, 0.5)));
    }

    #[test]
    fn test_add_all_counts_changes() {
        let mut a = empty_alignment();
        let added = a.add_all(vec![
            Mapping::new(1, 10, 0.9),
            Mapping::new(1, 10, 0.4),
            Mapping::new(2, 20, 0.8),
        ]);
        assert_eq!(added, 2);
    }

    #[test]
    fn test_sort_by_similarity_keeps_lookup_consistent() {
        let mut a = empty_alignment();
        a.add_all(vec![
            Mapping::new(1, 10, 0.6),
            Mapping::new(2, 20, 0.9),
            Mapping::new(3, 30, 0.75),
        ]);
        a.sort_by_similarity();

        let order: Vec<TermId> = a.iter().map(Mapping::source).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(a.get(1, 10).unwrap().similarity(), 0.6);
        assert!(!a.add(Mapping::new(3, 30, 0.7)));
    }
}
