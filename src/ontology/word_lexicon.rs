//! Word-level view of a lexicon with informativeness weighting.

use std::collections::{HashMap, HashSet};

use super::lexicon::Lexicon;
use super::text::words;
use super::types::TermId;

/// Words of a [`Lexicon`]'s names, with the terms carrying each word.
///
/// Every word gets an evidence content `EC(word) = 1 - ln(n) / ln(N)`,
/// where `n` is the number of terms carrying the word and `N` the number of
/// terms with any word: rare words score close to 1, words carried by every
/// term score 0. `EC(term)` is the term's total weighted word mass,
/// `sum(EC(word) * weight(word, term))`.
#[derive(Debug, Clone, Default)]
pub struct WordLexicon {
    word_terms: HashMap<String, HashMap<TermId, f64>>,
    word_ec: HashMap<String, f64>,
    term_ec: HashMap<TermId, f64>,
}

impl WordLexicon {
    /// Build from every term of `lexicon`.
    pub fn new(lexicon: &Lexicon) -> Self {
        Self::build(lexicon, None)
    }

    /// Build from `lexicon`, leaving out the terms in `excluded`.
    pub fn excluding(lexicon: &Lexicon, excluded: &HashSet<TermId>) -> Self {
        Self::build(lexicon, Some(excluded))
    }

    fn build(lexicon: &Lexicon, excluded: Option<&HashSet<TermId>>) -> Self {
        let mut word_terms: HashMap<String, HashMap<TermId, f64>> = HashMap::new();

        for name in lexicon.names() {
            let name_words = words(name);
            if name_words.is_empty() {
                continue;
            }
            let Some(entries) = lexicon.entries(name) else {
                continue;
            };

            for (&term, entry) in entries {
                if excluded.is_some_and(|ex| ex.contains(&term)) {
                    continue;
                }
                for word in &name_words {
                    let weight = word_terms
                        .entry(word.clone())
                        .or_default()
                        .entry(term)
                        .or_insert(0.0);
                    // A word shared by several names of a term keeps its best weight
                    if entry.weight > *weight {
                        *weight = entry.weight;
                    }
                }
            }
        }

        let total_terms = word_terms
            .values()
            .flat_map(|terms| terms.keys())
            .collect::<HashSet<_>>()
            .len();
        let max = (total_terms as f64).ln();

        let word_ec: HashMap<String, f64> = word_terms
            .iter()
            .map(|(word, terms)| {
                let ec = if max > 0.0 {
                    (1.0 - (terms.len() as f64).ln() / max).max(0.0)
                } else {
                    1.0
                };
                (word.clone(), ec)
            })
            .collect();

        let mut term_ec: HashMap<TermId, f64> = HashMap::new();
        for (word, terms) in &word_terms {
            let ec = word_ec[word];
            for (&term, &weight) in terms {
                *term_ec.entry(term).or_insert(0.0) += ec * weight;
            }
        }

        Self {
            word_terms,
            word_ec,
            term_ec,
        }
    }

    /// All words.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.word_terms.keys().map(String::as_str)
    }

    /// Words with the terms carrying them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<TermId, f64>)> + '_ {
        self.word_terms
            .iter()
            .map(|(word, terms)| (word.as_str(), terms))
    }

    /// Terms carrying `word` with their weights; `None` if the word is absent.
    pub fn terms(&self, word: &str) -> Option<&HashMap<TermId, f64>> {
        self.word_terms.get(word)
    }

    /// Weight of `word` for `term`, or 0.0 if the term does not carry it.
    pub fn weight(&self, word: &str, term: TermId) -> f64 {
        self.word_terms
            .get(word)
            .and_then(|terms| terms.get(&term))
            .copied()
            .unwrap_or(0.0)
    }

    /// Evidence content of `word`; 0.0 for unknown words.
    pub fn word_ec(&self, word: &str) -> f64 {
        self.word_ec.get(word).copied().unwrap_or(0.0)
    }

    /// Weighted word mass of `term`; 0.0 for terms without words.
    pub fn term_ec(&self, term: TermId) -> f64 {
        self.term_ec.get(&term).copied().unwrap_or(0.0)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_terms.len()
    }

    /// Number of terms with at least one word.
    pub fn term_count(&self) -> usize {
        self.term_ec.len()
    }

    /// The `limit` most informative words, highest EC first, ties by word.
    pub fn top_words(&self, limit: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .word_ec
            .iter()
            .map(|(word, &ec)| (word.as_str(), ec))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked.truncate(limit);
        ranked
    }
}
