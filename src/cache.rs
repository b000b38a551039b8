//! Thesaurus lookup cache.
//!
//! Thesaurus queries are idempotent and may be slow (on-disk databases,
//! remote services), so repeated lookups of the same name are answered from
//! a bounded in-memory cache shared by every matcher holding the wrapper.

use std::collections::BTreeSet;
use std::sync::Arc;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::thesaurus::Thesaurus;

/// Thesaurus wrapper memoizing lookups per distinct name.
///
/// Failed lookups are not cached.
pub struct CachedThesaurus<T> {
    /// Underlying thesaurus.
    inner: T,
    /// Cached word forms by name.
    cache: Cache<String, Arc<BTreeSet<String>>>,
    /// Whether caching is enabled.
    enabled: bool,
}

impl<T: Thesaurus> CachedThesaurus<T> {
    /// Create a cached thesaurus from configuration.
    pub fn new(inner: T, config: &CacheConfig) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(config.max_entries).build(),
            enabled: config.enabled,
        }
    }

    /// Get the underlying thesaurus.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Invalidate all cache entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        CacheStats {
            entries: self.cache.entry_count(),
            enabled: self.enabled,
        }
    }
}

impl<T: Thesaurus> Thesaurus for CachedThesaurus<T> {
    fn synonym_forms(&self, name: &str) -> Result<BTreeSet<String>> {
        if !self.enabled {
            return self.inner.synonym_forms(name);
        }

        if let Some(cached) = self.cache.get(name) {
            return Ok((*cached).clone());
        }

        let forms = self.inner.synonym_forms(name)?;
        self.cache.insert(name.to_string(), Arc::new(forms.clone()));
        Ok(forms)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cached names.
    pub entries: u64,
    /// Whether caching is enabled.
    pub enabled: bool,
}
