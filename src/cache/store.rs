//! Cache Store Module
//!
//! In-process key-value store with per-entry TTL, backing the palindrome
//! verdict cache.

use std::collections::HashMap;
use std::sync::Arc;

use axum::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, Expiring, KeyValueCache, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::CacheError;

// == Cache Store ==
/// Bounded map of expiring string values.
///
/// When full, the entry closest to its deadline is evicted to make room.
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, Expiring<String>>,
    stats: CacheStats,
    max_entries: usize,
}

impl CacheStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Set With Expiry ==
    /// Stores `value` under `key` for `ttl_seconds`, replacing any previous
    /// value and deadline.
    pub fn set_ex(
        &mut self,
        key: String,
        value: String,
        ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key must be 1..={} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidValue(format!(
                "value exceeds {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_one();
        }

        self.entries.insert(key, Expiring::new(value, ttl_seconds));
        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`. Expired entries are dropped on read.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let live = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                None
            }
            None => None,
        };

        match live {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        live
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.record_eviction();
        }
    }
}

// == Memory Cache ==
/// Shareable handle over a [`CacheStore`], usable as a [`KeyValueCache`].
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries))),
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        // Write lock: reads update stats and may drop an expired entry
        Ok(self.store.write().await.get(key))
    }

    async fn set_ex(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), CacheError> {
        self.store
            .write()
            .await
            .set_ex(key.to_string(), value, ttl_seconds)
    }
}
