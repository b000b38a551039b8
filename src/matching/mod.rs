//! Lexical matching strategies.
//!
//! A [`Matcher`] turns the lexicons of two ontologies into an [`Alignment`].
//! Two strategies are provided:
//!
//! - [`WordMatcher`]: splits names into words and scores term pairs by the
//!   weighted Jaccard index of the informative words they share.
//!
//! - [`SynonymMatcher`]: extends both lexicons with the word forms a
//!   [`Thesaurus`] returns for their names, then matches exact names, keeping
//!   only matches that at least one thesaurus-derived entry supports.
//!
//! ```text
//!   Ontology ──► Lexicon ──┬──► WordLexicon ─────────► WordMatcher ─────┐
//!                          │                                             ├──► Alignment
//!                          └──► extend(thesaurus) ───► SynonymMatcher ──┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use lexalign::matching::{Matcher, WordMatcher};
//!
//! let alignment = WordMatcher::new().match_ontologies(&source, &target, 0.6)?;
//! for mapping in &alignment {
//!     println!("{mapping}");
//! }
//! ```

mod evidence;
mod synonym;
mod word;

pub use evidence::EvidenceTable;
pub use synonym::SynonymMatcher;
pub use word::WordMatcher;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::config::Config;
use crate::error::Result;
use crate::ontology::Ontology;
use crate::thesaurus::Thesaurus;

/// Common contract of all matching strategies.
///
/// Implementations hold no per-call state, so one matcher may serve several
/// ontology pairs concurrently.
pub trait Matcher: Send + Sync {
    /// Short name of the strategy.
    fn name(&self) -> &str;

    /// Every correspondence scoring at least `threshold` between the terms of
    /// `source` and `target`.
    fn match_ontologies(
        &self,
        source: &Arc<Ontology>,
        target: &Arc<Ontology>,
        threshold: f64,
    ) -> Result<Alignment>;

    /// New correspondences between terms that `alignment` does not map yet.
    ///
    /// Only the new mappings are returned; `alignment` is left untouched.
    fn extend_alignment(&self, alignment: &Alignment, threshold: f64) -> Result<Alignment>;
}

/// Available matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    Word,
    Synonym,
}

impl MatcherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherKind::Word => "word",
            MatcherKind::Synonym => "synonym",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "word" => Ok(MatcherKind::Word),
            "synonym" => Ok(MatcherKind::Synonym),
            other => Err(format!("unknown matching strategy: {other}")),
        }
    }
}

/// Create a matcher from configuration.
///
/// The synonym strategy needs a thesaurus; the word strategy ignores it.
pub fn create_matcher(
    kind: MatcherKind,
    config: &Config,
    thesaurus: Option<Arc<dyn Thesaurus>>,
) -> Result<Box<dyn Matcher>> {
    match kind {
        MatcherKind::Word => Ok(Box::new(WordMatcher::with_config(&config.matching))),
        MatcherKind::Synonym => {
            let thesaurus = thesaurus.ok_or_else(|| {
                crate::error::ThesaurusError::Unavailable(
                    "the synonym strategy requires a thesaurus".to_string(),
                )
            })?;
            Ok(Box::new(SynonymMatcher::with_config(
                thesaurus,
                &config.synonym,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexAlignError, ThesaurusError};
    use crate::ontology::{LexicalType, Lexicon};
    use crate::thesaurus::SynsetThesaurus;

    fn ontology(uri: &str, names: &[(u32, &str)]) -> Arc<Ontology> {
        let mut builder = Lexicon::builder();
        for &(term, name) in names {
            builder.add(term, name, LexicalType::Label, "", 1.0);
        }
        Arc::new(Ontology::new(uri, builder.build()))
    }

    #[test]
    fn test_matcher_kind_parse() {
        assert_eq!("word".parse::<MatcherKind>().unwrap(), MatcherKind::Word);
        assert_eq!(
            "Synonym".parse::<MatcherKind>().unwrap(),
            MatcherKind::Synonym
        );
        assert!("string".parse::<MatcherKind>().is_err());
        assert_eq!(MatcherKind::Synonym.to_string(), "synonym");
    }

    #[test]
    fn test_create_matcher() {
        let config = Config::default();
        let word = create_matcher(MatcherKind::Word, &config, None).unwrap();
        assert_eq!(word.name(), "word");

        let thesaurus: Arc<dyn Thesaurus> = Arc::new(SynsetThesaurus::new());
        let synonym = create_matcher(MatcherKind::Synonym, &config, Some(thesaurus)).unwrap();
        assert_eq!(synonym.name(), "synonym");
    }

    #[test]
    fn test_synonym_matcher_requires_thesaurus() {
        let result = create_matcher(MatcherKind::Synonym, &Config::default(), None);
        assert!(matches!(
            result,
            Err(LexAlignError::Thesaurus(ThesaurusError::Unavailable(_)))
        ));
    }

    #[test]
    fn test_matchers_are_interchangeable() {
        let source = ontology("s", &[(1, "car"), (2, "heart valve")]);
        let target = ontology("t", &[(10, "automobile"), (11, "valve of heart")]);
        let thesaurus: Arc<dyn Thesaurus> =
            Arc::new(SynsetThesaurus::from_synsets(vec![vec!["car", "automobile"]]));

        let matchers: Vec<Box<dyn Matcher>> = vec![
            Box::new(WordMatcher::new()),
            Box::new(SynonymMatcher::new(thesaurus)),
        ];

        let found: Vec<(String, usize)> = matchers
            .iter()
            .map(|m| {
                let alignment = m.match_ontologies(&source, &target, 0.5).unwrap();
                (m.name().to_string(), alignment.len())
            })
            .collect();

        // heart valve / valve of heart share every informative word
        assert_eq!(found[0], ("word".to_string(), 1));
        // car / automobile only through the thesaurus
        assert_eq!(found[1], ("synonym".to_string(), 1));
    }
}
