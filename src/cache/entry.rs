//! Expiring Entry Module
//!
//! A value paired with a creation time and a deadline. Shared by the verdict
//! cache and the session store.

use chrono::{DateTime, Duration, Utc};

// == Expiring ==
/// A stored value that stops being valid once its deadline passes.
#[derive(Debug, Clone)]
pub struct Expiring<V> {
    /// The stored value
    pub value: V,
    /// When the entry was written
    pub created_at: DateTime<Utc>,
    /// When the entry stops being valid
    pub expires_at: DateTime<Utc>,
}

impl<V> Expiring<V> {
    // == Constructor ==
    /// Wraps `value` so that it expires `ttl_seconds` from now.
    pub fn new(value: V, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let seconds = i64::try_from(ttl_seconds)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        let ttl = Duration::seconds(seconds);

        Self {
            value,
            created_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in whole seconds, zero once expired.
    pub fn ttl_remaining(&self) -> u64 {
        let remaining = self.expires_at - Utc::now();
        u64::try_from(remaining.num_seconds()).unwrap_or(0)
    }
}
