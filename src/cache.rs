// Tense Detector Result Cache
// Bounded LRU cache with hit/miss/eviction accounting

use crate::types::AnalysisResult;
use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Default number of cached analyses
pub const CACHE_SIZE: usize = 50;

/// Snapshot of cache counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    pub max_size: usize,
    /// Hit rate formatted as a percentage, e.g. "66.7%"
    pub hit_rate: String,
}

impl CacheStats {
    /// Hit rate in percent, 0.0 when no lookups happened yet
    pub fn hit_rate_percent(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64 * 100.0
        }
    }
}

/// LRU cache of analysis results keyed by normalized input
///
/// `clear` drops entries and resets the eviction counter but keeps the
/// hit/miss history.
pub struct AnalysisCache {
    entries: LruCache<String, AnalysisResult>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl AnalysisCache {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a key, promoting it to most recently used on a hit
    pub fn get(&mut self, key: &str) -> Option<AnalysisResult> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert or refresh an entry, evicting the least recently used when full
    pub fn set(&mut self, key: impl Into<String>, value: AnalysisResult) {
        let key = key.into();
        if self.entries.contains(&key) {
            self.entries.pop(&key);
        } else if self.entries.len() >= self.capacity() && self.entries.pop_lru().is_some() {
            self.evictions += 1;
        }
        self.entries.put(key, value);
    }

    /// Whether a key is cached, without touching recency or counters
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.evictions = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            size: self.entries.len(),
            max_size: self.capacity(),
            hit_rate: String::new(),
        };
        stats.hit_rate = format!("{:.1}%", stats.hit_rate_percent());
        stats
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(CACHE_SIZE)
    }
}
