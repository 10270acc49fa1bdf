//! Access control.
//!
//! A protected request is admitted in four steps, each of which can reject it:
//!
//! 1. the `sid` cookie names a live session holding an access-token
//! 2. a bearer token is present and verifies
//! 3. the token subject resolves to a user
//! 4. the user's stored access-token equals both the session's copy and the
//!    token's `authKey`
//!
//! Step 4 is what makes logout and re-login revoke outstanding tokens.

use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tracing::warn;
use uuid::Uuid;

use crate::auth::session::SESSION_COOKIE;
use crate::auth::{Claims, SessionStore, TokenService};
use crate::error::{ApiError, Result};
use crate::models::Role;
use crate::store::UserStore;

/// Alternative header carrying a raw token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Raw credentials found on a request, before any checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub session_id: Option<String>,
    pub bearer: Option<String>,
}

impl Credentials {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            session_id: session_id(headers),
            bearer: bearer_token(headers),
        }
    }
}

fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let from_authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let from_access_header = || {
        headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    };

    from_authorization
        .or_else(from_access_header)
        .map(str::to_string)
}

/// An admitted caller, handed explicitly to handlers.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub session_id: String,
    pub claims: Claims,
}

impl Identity {
    fn has_role(&self, role: Role) -> bool {
        self.claims.role.eq_ignore_ascii_case(role.as_str())
    }

    /// Admits admins and super-admins.
    pub fn require_admin(&self) -> Result<()> {
        if self.has_role(Role::Admin) || self.has_role(Role::SuperAdmin) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }

    /// Admits super-admins only.
    pub fn require_super_admin(&self) -> Result<()> {
        if self.has_role(Role::SuperAdmin) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

#[derive(Clone)]
pub struct AccessControl {
    sessions: SessionStore,
    tokens: Arc<TokenService>,
    users: UserStore,
}

impl AccessControl {
    pub fn new(sessions: SessionStore, tokens: Arc<TokenService>, users: UserStore) -> Self {
        Self {
            sessions,
            tokens,
            users,
        }
    }

    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Identity> {
        let session_id = credentials
            .session_id
            .as_deref()
            .ok_or(ApiError::SessionExpired)?;
        let session = self
            .sessions
            .get(session_id)
            .await
            .filter(|s| !s.access_token.is_empty())
            .ok_or(ApiError::SessionExpired)?;

        let bearer = credentials
            .bearer
            .as_deref()
            .ok_or(ApiError::Unauthenticated)?;
        let claims = self.tokens.verify(bearer)?;
        let user_id = claims.user_id()?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .ok_or(ApiError::UserNotFound)?;

        let current = user.access_token.as_str();
        if current.is_empty() || current != session.access_token || current != claims.auth_key {
            warn!(%user_id, "rejecting token from a superseded session");
            return Err(ApiError::SessionInvalid);
        }

        Ok(Identity {
            user_id,
            session_id: session_id.to_string(),
            claims,
        })
    }
}
