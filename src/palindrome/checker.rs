//! Cache-backed palindrome check.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::KeyValueCache;
use crate::error::{ApiError, Result};
use crate::palindrome::is_palindrome;
use crate::store::MessageStore;

/// Prefix of every verdict key in the cache.
pub const CACHE_KEY_PREFIX: &str = "palindrome:";

/// What to test: a stored message or a literal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    MessageId(String),
    Content(String),
}

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub result: bool,
    pub from_cache: bool,
}

/// Cache key for `content`: the prefix plus the SHA-256 hex digest of the raw
/// string.
pub fn cache_key(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{}{}", CACHE_KEY_PREFIX, hex::encode(digest))
}

/// Resolves subjects to content and memoizes verdicts in an optional cache.
///
/// The cache never decides an answer. A failed or garbled lookup is a miss
/// and a failed write is logged and dropped.
#[derive(Clone)]
pub struct PalindromeChecker {
    messages: MessageStore,
    cache: Option<Arc<dyn KeyValueCache>>,
    ttl_seconds: u64,
}

impl PalindromeChecker {
    pub fn new(
        messages: MessageStore,
        cache: Option<Arc<dyn KeyValueCache>>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            messages,
            cache,
            ttl_seconds,
        }
    }

    pub async fn check(&self, subject: Subject) -> Result<Verdict> {
        let content = self.resolve(subject).await?;
        let Some(cache) = self.cache.as_ref() else {
            return Ok(Verdict {
                result: is_palindrome(&content),
                from_cache: false,
            });
        };

        let key = cache_key(&content);
        match cache.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(result) => {
                    debug!(%key, "palindrome verdict served from cache");
                    return Ok(Verdict {
                        result,
                        from_cache: true,
                    });
                }
                Err(e) => warn!(%key, error = %e, "discarding undecodable cached verdict"),
            },
            Ok(None) => {}
            Err(e) => warn!(%key, error = %e, "cache lookup failed, recomputing verdict"),
        }

        let result = is_palindrome(&content);
        if let Err(e) = cache.set_ex(&key, result.to_string(), self.ttl_seconds).await {
            warn!(%key, error = %e, "failed to cache palindrome verdict");
        }

        Ok(Verdict {
            result,
            from_cache: false,
        })
    }

    async fn resolve(&self, subject: Subject) -> Result<String> {
        match subject {
            Subject::Content(content) => Ok(content),
            Subject::MessageId(raw) => {
                let not_found =
                    || ApiError::NotFound("Message not found or has been deleted".to_string());
                let id = Uuid::parse_str(raw.trim()).map_err(|_| not_found())?;
                self.messages
                    .find(id)
                    .await
                    .map(|m| m.content)
                    .ok_or_else(not_found)
            }
        }
    }
}
