//! Message repository.
//!
//! Every mutating query is scoped to `(id, creator)`, so a message owned by
//! someone else is indistinguishable from a missing one.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::Message;

/// Shared in-process message collection with a unique `(creator, content)` index.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<HashMap<Uuid, Message>>>,
}

fn duplicate() -> ApiError {
    ApiError::Conflict("You already have a message with this content".to_string())
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, creator: Uuid, content: String) -> Result<Message> {
        if content.is_empty() {
            return Err(ApiError::Validation(
                "Message content is required".to_string(),
            ));
        }

        let mut messages = self.messages.write().await;
        if messages
            .values()
            .any(|m| m.creator == creator && m.content == content)
        {
            return Err(duplicate());
        }

        let message = Message::new(creator, content);
        messages.insert(message.id, message.clone());
        Ok(message)
    }

    /// Unscoped lookup, used by the public palindrome check.
    pub async fn find(&self, id: Uuid) -> Option<Message> {
        self.messages.read().await.get(&id).cloned()
    }

    /// Applies `content` (when given) and bumps `updated_at`.
    pub async fn update_owned(
        &self,
        id: Uuid,
        creator: Uuid,
        content: Option<String>,
    ) -> Result<Message> {
        let mut messages = self.messages.write().await;

        if !messages.get(&id).is_some_and(|m| m.creator == creator) {
            return Err(ApiError::NotFound("Message does not exist".to_string()));
        }

        if let Some(ref content) = content {
            if messages
                .values()
                .any(|m| m.id != id && m.creator == creator && &m.content == content)
            {
                return Err(duplicate());
            }
        }

        let message = messages
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("Message does not exist".to_string()))?;

        if let Some(content) = content.filter(|c| !c.is_empty()) {
            message.content = content;
        }
        message.updated_at = Utc::now();
        Ok(message.clone())
    }

    pub async fn delete_owned(&self, id: Uuid, creator: Uuid) -> Result<Message> {
        let mut messages = self.messages.write().await;

        match messages.get(&id) {
            Some(m) if m.creator == creator => {}
            _ => {
                return Err(ApiError::NotFound(
                    "Message not found or has been deleted".to_string(),
                ))
            }
        }

        messages
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound("Message not found or has been deleted".to_string()))
    }

    /// The creator's messages, oldest first.
    pub async fn list_by_creator(&self, creator: Uuid) -> Vec<Message> {
        let mut owned: Vec<Message> = self
            .messages
            .read()
            .await
            .values()
            .filter(|m| m.creator == creator)
            .cloned()
            .collect();
        owned.sort_by_key(|m| m.created_at);
        owned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_list() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();

        let created = store.create(owner, "racecar".to_string()).await.unwrap();
        let listed = store.list_by_creator(owner).await;

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.created_at, created.updated_at);
        assert!(store.list_by_creator(Uuid::new_v4()).await.is_empty());
    }

    #[tokio::test]
    async fn test_creator_content_is_unique() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();

        store.create(owner, "noon".to_string()).await.unwrap();
        let err = store.create(owner, "noon".to_string()).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // Same content under another owner is fine
        assert!(store.create(Uuid::new_v4(), "noon".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_bumps_updated_at() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();
        let created = store.create(owner, "first".to_string()).await.unwrap();

        let updated = store
            .update_owned(created.id, owner, Some("second".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.content, "second");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_to_own_duplicate_conflicts() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();
        store.create(owner, "one".to_string()).await.unwrap();
        let two = store.create(owner, "two".to_string()).await.unwrap();

        let err = store
            .update_owned(two.id, owner, Some("one".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // Rewriting a message with its own content is not a conflict
        assert!(store
            .update_owned(two.id, owner, Some("two".to_string()))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_other_owner_cannot_update_or_delete() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let created = store.create(owner, "mine".to_string()).await.unwrap();

        let update = store
            .update_owned(created.id, intruder, Some("theirs".to_string()))
            .await;
        assert!(matches!(update, Err(ApiError::NotFound(_))));

        let delete = store.delete_owned(created.id, intruder).await;
        assert!(matches!(delete, Err(ApiError::NotFound(_))));

        assert_eq!(store.find(created.id).await.unwrap().content, "mine");
    }

    #[tokio::test]
    async fn test_foreign_or_missing_id_is_not_found_before_duplicate_check() {
        let store = MessageStore::new();
        let ada = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let adas = store.create(ada, "mine".to_string()).await.unwrap();
        store.create(bob, "stolen".to_string()).await.unwrap();

        let cross = store
            .update_owned(adas.id, bob, Some("stolen".to_string()))
            .await;
        assert!(matches!(cross, Err(ApiError::NotFound(_))));

        let missing = store
            .update_owned(Uuid::new_v4(), bob, Some("stolen".to_string()))
            .await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));

        assert_eq!(store.find(adas.id).await.unwrap().content, "mine");
    }

    #[tokio::test]
    async fn test_delete_owned_removes() {
        let store = MessageStore::new();
        let owner = Uuid::new_v4();
        let created = store.create(owner, "bye".to_string()).await.unwrap();

        let deleted = store.delete_owned(created.id, owner).await.unwrap();
        assert_eq!(deleted.id, created.id);
        assert!(store.find(created.id).await.is_none());
        assert!(store.delete_owned(created.id, owner).await.is_err());
    }
}
