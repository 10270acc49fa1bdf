//! Shared application state.

use std::sync::Arc;

use crate::auth::{AccessControl, SessionStore, TokenService};
use crate::cache::{KeyValueCache, MemoryCache};
use crate::config::Config;
use crate::palindrome::PalindromeChecker;
use crate::store::{MessageStore, UserStore};

/// Application state shared across all handlers.
///
/// Every member is a cheap handle onto shared storage, so cloning per request
/// is fine.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: UserStore,
    pub messages: MessageStore,
    pub sessions: SessionStore,
    pub tokens: Arc<TokenService>,
    pub access: AccessControl,
    pub palindrome: PalindromeChecker,
    /// Verdict cache, `None` when caching is disabled
    pub cache: Option<MemoryCache>,
}

impl AppState {
    /// Builds every store and service from configuration.
    pub fn from_config(config: &Config) -> Self {
        let users = UserStore::new();
        let messages = MessageStore::new();
        let sessions = SessionStore::new(config.session_ttl);
        let tokens = Arc::new(TokenService::new(
            &config.jwt_secret,
            config.token_lifespan,
            config.app_env.clone(),
        ));
        let access = AccessControl::new(sessions.clone(), tokens.clone(), users.clone());

        let cache = config
            .cache_enabled
            .then(|| MemoryCache::new(config.cache_max_entries));
        let palindrome = PalindromeChecker::new(
            messages.clone(),
            cache
                .clone()
                .map(|c| Arc::new(c) as Arc<dyn KeyValueCache>),
            config.cache_ttl,
        );

        Self {
            config: Arc::new(config.clone()),
            users,
            messages,
            sessions,
            tokens,
            access,
            palindrome,
            cache,
        }
    }
}
