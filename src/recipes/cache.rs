// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-process recipe cache keyed by canonical recipe URL
//!
//! Keys are exact strings: `https://site/a` and `https://site/a/` are
//! different entries. Entries older than the TTL are evicted on read and
//! reported as absent.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

use super::types::{CacheEntry, RecipeDetail};

/// Cache statistics
#[derive(Debug, Clone)]
pub struct RecipeCacheStats {
    /// Total entries in cache
    pub total: usize,
    /// Expired entries (not yet evicted)
    pub expired: usize,
    /// Maximum cache capacity
    pub max: usize,
}

/// Thread-safe recipe cache with TTL and capacity bounds
pub struct RecipeCache {
    cache: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl RecipeCache {
    /// Create a new recipe cache
    ///
    /// # Arguments
    /// * `ttl` - Age after which an entry is treated as absent
    /// * `max_entries` - Capacity; on overflow expired entries are purged
    ///   first, then the oldest entry is evicted
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    /// Store a record under `url`, replacing any previous entry
    ///
    /// No-op for an empty URL.
    pub fn put(&self, url: &str, record: RecipeDetail) {
        if url.is_empty() {
            return;
        }

        let mut cache = match self.cache.write() {
            Ok(c) => c,
            Err(_) => return,
        };

        if !cache.contains_key(url) && cache.len() >= self.max_entries {
            self.purge_expired(&mut cache);
            if cache.len() >= self.max_entries {
                Self::evict_oldest(&mut cache);
            }
        }

        cache.insert(
            url.to_string(),
            CacheEntry {
                data: record,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Exact-match lookup; expired entries are evicted and reported as absent
    pub fn get(&self, url: &str) -> Option<CacheEntry> {
        {
            let cache = self.cache.read().ok()?;
            let entry = cache.get(url)?;
            if !self.is_expired(entry.fetched_at) {
                return Some(entry.clone());
            }
        }

        debug!("Cache entry expired for: {}", url);
        if let Ok(mut cache) = self.cache.write() {
            let still_expired = cache
                .get(url)
                .map(|e| self.is_expired(e.fetched_at))
                .unwrap_or(false);
            if still_expired {
                cache.remove(url);
            } else if let Some(entry) = cache.get(url) {
                // Rewritten between the two locks
                return Some(entry.clone());
            }
        }
        None
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cached entries, returning how many were dropped
    pub fn clear(&self) -> usize {
        match self.cache.write() {
            Ok(mut cache) => {
                let dropped = cache.len();
                cache.clear();
                dropped
            }
            Err(_) => 0,
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> RecipeCacheStats {
        let cache = match self.cache.read() {
            Ok(c) => c,
            Err(_) => {
                return RecipeCacheStats {
                    total: 0,
                    expired: 0,
                    max: self.max_entries,
                }
            }
        };
        let expired = cache
            .values()
            .filter(|e| self.is_expired(e.fetched_at))
            .count();
        RecipeCacheStats {
            total: cache.len(),
            expired,
            max: self.max_entries,
        }
    }

    fn purge_expired(&self, cache: &mut HashMap<String, CacheEntry>) {
        let before = cache.len();
        cache.retain(|_, entry| !self.is_expired(entry.fetched_at));
        if cache.len() < before {
            debug!("Purged {} expired cache entries", before - cache.len());
        }
    }

    fn is_expired(&self, fetched_at: DateTime<Utc>) -> bool {
        (Utc::now() - fetched_at)
            .to_std()
            .map(|age| age > self.ttl)
            .unwrap_or(false)
    }

    fn evict_oldest(cache: &mut HashMap<String, CacheEntry>) {
        if let Some(oldest_key) = cache
            .iter()
            .min_by_key(|(_, v)| v.fetched_at)
            .map(|(k, _)| k.clone())
        {
            debug!("Evicting oldest cache entry: {}", oldest_key);
            cache.remove(&oldest_key);
        }
    }
}
