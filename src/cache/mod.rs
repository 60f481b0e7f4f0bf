//! Compiled-output caching.
//!
//! A process-wide map from request path to compiled CSS. Entries are
//! written on every successful compile, read only when cache reads are
//! enabled, and removed by explicit flush. No TTL, no size bound, no
//! dependency tracking: an entry stays valid until flushed, even if the
//! source file (or a file it imports) changes underneath it.

use std::sync::Arc;

use dashmap::DashMap;

use crate::observability::metrics;

/// Thread-safe cache of compiled stylesheets, keyed by request path.
///
/// Clones share the same underlying map, so the middleware handle and
/// in-flight requests all observe the same entries. Concurrent first
/// requests for one uncached path may each compile independently; the
/// results are identical and the last write wins.
#[derive(Clone, Default)]
pub struct ResultCache {
    inner: Arc<DashMap<String, String>>,
}

impl ResultCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the compiled output for a request path.
    pub fn get(&self, path: &str) -> Option<String> {
        self.inner.get(path).map(|entry| entry.value().clone())
    }

    /// Store compiled output for a request path.
    pub fn insert(&self, path: impl Into<String>, css: impl Into<String>) {
        self.inner.insert(path.into(), css.into());
        metrics::record_cache_size(self.inner.len());
    }

    /// Remove one entry, or clear everything when no path is given.
    ///
    /// Flushing a path that is not cached is a no-op; other entries are
    /// never touched by a targeted flush.
    pub fn flush(&self, path: Option<&str>) {
        match path {
            Some(path) => {
                self.inner.remove(path);
                metrics::record_flush("path");
            }
            None => {
                self.inner.clear();
                metrics::record_flush("all");
            }
        }
        metrics::record_cache_size(self.inner.len());
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
