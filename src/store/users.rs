//! User repository.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{Role, User};

/// Fields needed to create a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Shared in-process user collection with a unique email index.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user with a fresh id and access-token. Emails are unique
    /// case-insensitively.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let email = new_user.email.trim().to_lowercase();
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == email) {
            return Err(ApiError::Conflict(format!(
                "A user with email {} already exists",
                email
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            access_token: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim().to_lowercase();
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Replaces the user's access-token with a new random value, revoking every
    /// token issued against the old one. Returns the new value.
    pub async fn rotate_access_token(&self, id: Uuid) -> Result<String> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        user.access_token = Uuid::new_v4().to_string();
        Ok(user.access_token.clone())
    }

    pub async fn set_role(&self, id: Uuid, role: Role) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        user.role = role;
        Ok(user.clone())
    }

    /// All users, oldest first.
    pub async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        users
    }
}
