//! In-memory synset thesaurus.

use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::Thesaurus;
use crate::error::{LoadError, Result};
use crate::ontology::normalize_name;

/// Thesaurus backed by a list of synsets held in memory.
///
/// A lookup returns the forms of every synset containing the name,
/// including the name itself, like a WordNet word-form query.
#[derive(Debug, Clone, Default)]
pub struct SynsetThesaurus {
    synsets: Vec<Vec<String>>,
    index: HashMap<String, Vec<usize>>,
}

impl SynsetThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from synsets; forms are trimmed and empty forms dropped.
    pub fn from_synsets<I, S, F>(synsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut thesaurus = Self::new();
        for synset in synsets {
            thesaurus.add_synset(synset);
        }
        thesaurus
    }

    /// Add a synset. Synsets with no non-empty form are ignored.
    pub fn add_synset<S, F>(&mut self, forms: S)
    where
        S: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let forms: Vec<String> = forms
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if forms.is_empty() {
            return;
        }

        let id = self.synsets.len();
        for form in &forms {
            let ids = self.index.entry(normalize_name(form)).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.synsets.push(forms);
    }

    /// Parse synsets from text: one synset per line, forms separated by
    /// `,` or `|`. Blank lines and `#` comments are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut thesaurus = Self::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let before = thesaurus.synset_count();
            thesaurus.add_synset(line.split(|c: char| c == ',' || c == '|'));
            if thesaurus.synset_count() == before {
                return Err(LoadError::Parse {
                    line: n + 1,
                    reason: "synset has no word forms".to_string(),
                }
                .into());
            }
        }
        Ok(thesaurus)
    }

    /// Load synsets from a file, see [`SynsetThesaurus::from_reader`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let thesaurus = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(
            path = %path.display(),
            synsets = thesaurus.synset_count(),
            "Loaded thesaurus"
        );
        Ok(thesaurus)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }
}

impl Thesaurus for SynsetThesaurus {
    fn synonym_forms(&self, name: &str) -> Result<BTreeSet<String>> {
        let Some(ids) = self.index.get(&normalize_name(name)) else {
            return Ok(BTreeSet::new());
        };
        Ok(ids
            .iter()
            .flat_map(|&id| self.synsets[id].iter().cloned())
            .collect())
    }

    fn name(&self) -> &str {
        "synsets"
    }
}
