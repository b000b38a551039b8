//! Ontologies and their lexical views.
//!
//! An [`Ontology`] is, for matching purposes, an identifier plus a
//! [`Lexicon`] mapping names to term ids. Matchers derive further views
//! from the lexicon, such as the word-level [`WordLexicon`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Ontology   │────▶│   Lexicon    │────▶│ WordLexicon  │
//! │ (uri, terms) │     │ name → terms │     │ word → terms │
//! └──────────────┘     └──────────────┘     │  + EC(word)  │
//!                                           └──────────────┘
//! ```

mod lexicon;
mod text;
mod types;
mod word_lexicon;

pub use lexicon::{Lexicon, LexiconBuilder};
pub use text::{is_formula, normalize_name, words};
pub use types::*;
pub use word_lexicon::WordLexicon;

/// An ontology reduced to what lexical matching needs.
#[derive(Debug, Clone)]
pub struct Ontology {
    uri: String,
    lexicon: Lexicon,
}

impl Ontology {
    pub fn new(uri: impl Into<String>, lexicon: Lexicon) -> Self {
        Self {
            uri: uri.into(),
            lexicon,
        }
    }

    /// Identifier of the ontology.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
