//! Response DTOs
//!
//! Every successful response is wrapped in [`Envelope`], mirroring the error
//! envelope produced by `ApiError`.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::models::{Message, MessageView, PublicUser};

/// Uniform response wrapper: `{ success, payload?, message?, meta? }`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `payload`.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            message: None,
            meta: None,
        }
    }

}

impl Envelope<()> {
    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            payload: None,
            message: Some(message.into()),
            meta: None,
        }
    }
}

/// Payload of create and update.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub message: String,
    pub content: Message,
}

impl MessagePayload {
    pub fn created(content: Message) -> Self {
        Self {
            message: "Message created successfully".to_string(),
            content,
        }
    }

    pub fn updated(content: Message) -> Self {
        Self {
            message: "Update successful".to_string(),
            content,
        }
    }
}

/// Payload of remove.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedPayload {
    pub deleted: Message,
}

/// Payload of list.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesPayload {
    pub messages: Vec<MessageView>,
}

/// Payload of the palindrome test.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromePayload {
    pub message: String,
    pub check: bool,
    pub is_from_cache: bool,
}

impl PalindromePayload {
    pub fn new(check: bool, is_from_cache: bool) -> Self {
        let message = if check {
            "Message is a palindrome"
        } else {
            "Message is not a palindrome"
        };
        Self {
            message: message.to_string(),
            check,
            is_from_cache,
        }
    }
}

/// Payload carrying one user.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub user: PublicUser,
}

/// Payload of login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: PublicUser,
}

/// Payload of the user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UsersPayload {
    pub users: Vec<PublicUser>,
}

/// Cache section of the health report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheReport {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate as a fraction (0.0 to 1.0)
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheReport {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Verdict cache statistics, absent when caching is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheReport>,
}

impl HealthResponse {
    pub fn healthy(cache: Option<CacheStats>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache: cache.map(CacheReport::from),
        }
    }
}
