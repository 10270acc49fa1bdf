//! Expiry Sweep Task
//!
//! Background task that periodically drops expired verdicts and sessions.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::auth::SessionStore;
use crate::cache::MemoryCache;

/// Spawns a task that sweeps expired entries every `interval_secs` seconds.
///
/// Expired entries are already invisible to readers; the sweep only reclaims
/// memory. Abort the returned handle on shutdown.
pub fn spawn_cleanup_task(
    cache: Option<MemoryCache>,
    sessions: SessionStore,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let verdicts = match &cache {
                Some(cache) => cache.cleanup_expired().await,
                None => 0,
            };
            let expired_sessions = sessions.cleanup_expired().await;

            if verdicts + expired_sessions > 0 {
                info!(verdicts, sessions = expired_sessions, "expiry sweep removed entries");
            } else {
                debug!("expiry sweep found nothing to remove");
            }
        }
    })
}
