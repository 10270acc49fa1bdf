//! Server-side sessions.
//!
//! A session is created at login and remembers the access-token value the user
//! held at that moment. Clients refer to it through the `sid` cookie.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::cache::Expiring;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone)]
pub struct SessionData {
    pub user_id: Uuid,
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Expiring<SessionData>>>>,
    ttl_seconds: u64,
}

impl SessionStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Opens a session and returns its id.
    pub async fn create(&self, user_id: Uuid, access_token: String) -> String {
        let id = Uuid::new_v4().simple().to_string();
        let data = SessionData {
            user_id,
            access_token,
        };

        self.sessions
            .write()
            .await
            .insert(id.clone(), Expiring::new(data, self.ttl_seconds));
        id
    }

    /// The live session named `id`, if any.
    pub async fn get(&self, id: &str) -> Option<SessionData> {
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    pub async fn destroy(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Removes expired sessions and returns how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired());
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Cookie value that stores `session_id` for `max_age` seconds.
pub fn session_cookie(session_id: &str, max_age: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, session_id, max_age
    )
}

/// Cookie value that clears the session cookie.
pub fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}
