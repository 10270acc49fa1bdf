//! Cache Module
//!
//! Key-value caching with per-entry TTL, used to memoize palindrome verdicts.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use axum::async_trait;

use crate::error::CacheError;

// Re-export public types
pub use entry::Expiring;
pub use stats::CacheStats;
pub use store::{CacheStore, MemoryCache};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 64 * 1024;

// == Key-Value Cache ==
/// A string cache with expiring entries.
///
/// Callers treat the cache as advisory: an error from either method must
/// never change the answer a caller computes.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl_seconds`.
    async fn set_ex(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), CacheError>;
}
