//! Thesaurus lookups for synonym expansion.
//!
//! A [`Thesaurus`] answers, for a name, the set of word forms of every sense
//! the name has. Implementations are injected into matchers, never reached
//! through global state.
//!
//! - [`SynsetThesaurus`]: in-memory synsets, loadable from a text file
//! - [`CachedThesaurus`](crate::cache::CachedThesaurus): memoizing wrapper
//!   for slow backends

mod synsets;

pub use synsets::SynsetThesaurus;

use std::collections::BTreeSet;

use crate::error::Result;

/// Source of synonym word forms.
pub trait Thesaurus: Send + Sync {
    /// All word forms of every sense of `name`.
    ///
    /// Forms are trimmed and non-empty. The set is empty when the name is
    /// unknown; backend failures are returned as errors.
    fn synonym_forms(&self, name: &str) -> Result<BTreeSet<String>>;

    /// Get the name of this thesaurus.
    fn name(&self) -> &str;
}

impl<T: Thesaurus + ?Sized> Thesaurus for std::sync::Arc<T> {
    fn synonym_forms(&self, name: &str) -> Result<BTreeSet<String>> {
        (**self).synonym_forms(name)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
