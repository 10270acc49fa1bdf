//! Message records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::PublicUser;

/// A stored message. `(creator, content)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(creator: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Expands `creator` into the owner's public fields.
    pub fn with_creator(self, creator: PublicUser) -> MessageView {
        MessageView {
            id: self.id,
            content: self.content,
            creator,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A message with its creator expanded, as returned by listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: Uuid,
    pub content: String,
    pub creator: PublicUser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
