//! Sparse pairwise evidence accumulator.

use std::collections::HashMap;

use crate::ontology::TermId;

/// Evidence accumulated per (source term, target term) pair.
///
/// Only pairs that received evidence are stored; a pair is zero until first
/// touched. Tables built on separate threads are combined with
/// [`EvidenceTable::merge`].
#[derive(Debug, Clone, Default)]
pub struct EvidenceTable {
    cells: HashMap<TermId, HashMap<TermId, f64>>,
    len: usize,
}

impl EvidenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `evidence` to the (source, target) pair.
    pub fn add(&mut self, source: TermId, target: TermId, evidence: f64) {
        let row = self.cells.entry(source).or_default();
        let cell = row.entry(target).or_insert_with(|| {
            self.len += 1;
            0.0
        });
        *cell += evidence;
    }

    /// Accumulated evidence of the pair, if any.
    pub fn get(&self, source: TermId, target: TermId) -> Option<f64> {
        self.cells
            .get(&source)
            .and_then(|row| row.get(&target))
            .copied()
    }

    /// Sum two tables cell by cell.
    pub fn merge(self, other: Self) -> Self {
        let (mut larger, smaller) = if self.len >= other.len {
            (self, other)
        } else {
            (other, self)
        };
        for (source, target, evidence) in smaller.into_iter() {
            larger.add(source, target, evidence);
        }
        larger
    }

    /// All (source, target, evidence) triples.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, TermId, f64)> + '_ {
        self.cells.iter().flat_map(|(&source, row)| {
            row.iter()
                .map(move |(&target, &evidence)| (source, target, evidence))
        })
    }

    /// Number of pairs with evidence.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl IntoIterator for EvidenceTable {
    type Item = (TermId, TermId, f64);
    type IntoIter = Box<dyn Iterator<Item = (TermId, TermId, f64)>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.cells.into_iter().flat_map(|(source, row)| {
            row.into_iter()
                .map(move |(target, evidence)| (source, target, evidence))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut table = EvidenceTable::new();
        table.add(1, 10, 0.25);
        table.add(1, 10, 0.5);
        table.add(1, 11, 0.1);

        assert_eq!(table.get(1, 10), Some(0.75));
        assert_eq!(table.get(2, 10), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_merge_sums_shared_cells() {
        let mut a = EvidenceTable::new();
        a.add(1, 10, 0.5);
        a.add(2, 20, 0.5);
        let mut b = EvidenceTable::new();
        b.add(1, 10, 0.25);
        b.add(3, 30, 1.0);

        let merged = a.merge(b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(1, 10), Some(0.75));
        assert_eq!(merged.get(3, 30), Some(1.0));
        assert_eq!(merged.iter().count(), 3);
    }

    #[test]
    fn test_empty() {
        let table = EvidenceTable::new();
        assert!(table.is_empty());
        assert!(table.merge(EvidenceTable::new()).is_empty());
    }
}
