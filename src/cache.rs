//! Pluggable cache for parsed-label decompositions.
//!
//! Parsing the same URL string on every lookup is wasted work for traffic
//! with hot domains, so the matcher accepts an optional cache keyed by the
//! raw URL string. The trait is a capability with exactly two operations;
//! eviction policy, storage, and thread-safety all belong to the
//! implementation.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::types::ParsedDomain;

/// Default capacity for [`LruParseCache`].
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache consumed by [`DomainMatcher`](crate::DomainMatcher).
///
/// Lookups try `get` first and on miss parse the URL and `set` the result.
/// No per-key atomicity of get+parse+set is guaranteed by the matcher:
/// concurrent callers may parse the same URL twice, but both arrive at the
/// same deterministic result, so a race costs a redundant parse and never a
/// wrong answer.
pub trait ParseCache: Send + Sync {
    /// Previously stored decomposition for `url`, if any.
    fn get(&self, url: &str) -> Option<ParsedDomain>;

    /// Store the decomposition for `url`.
    fn set(&self, url: &str, parsed: ParsedDomain);
}

/// LRU-backed [`ParseCache`].
pub struct LruParseCache {
    inner: Mutex<LruCache<String, ParsedDomain>>,
}

impl LruParseCache {
    /// Create a cache holding up to `capacity` parsed URLs.
    ///
    /// A zero capacity is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of currently cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for LruParseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl ParseCache for LruParseCache {
    fn get(&self, url: &str) -> Option<ParsedDomain> {
        self.inner.lock().get(url).cloned()
    }

    fn set(&self, url: &str, parsed: ParsedDomain) {
        self.inner.lock().put(url.to_string(), parsed);
    }
}
