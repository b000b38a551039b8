//! lexalign: lexical ontology matching
//!
//! Computes scored correspondences between the terms of two ontologies from
//! the names attached to those terms, using word overlap or thesaurus-driven
//! synonym expansion.

pub mod alignment;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod matching;
pub mod ontology;
pub mod thesaurus;

pub use alignment::{Alignment, Mapping};
pub use cache::{CacheStats, CachedThesaurus};
pub use config::Config;
pub use error::{ConfigError, LexAlignError, LoadError, Result, ThesaurusError};
pub use loader::{load_alignment, load_lexicon, load_ontology, parse_alignment, parse_lexicon};
pub use matching::{
    create_matcher, EvidenceTable, Matcher, MatcherKind, SynonymMatcher, WordMatcher,
};
pub use ontology::{
    is_formula, LexicalEntry, LexicalType, Lexicon, LexiconBuilder, Ontology, TermId, WordLexicon,
};
pub use thesaurus::{SynsetThesaurus, Thesaurus};
