//! Request DTOs and their validation policies
//!
//! Each request type deserializes leniently (every field optional) and then
//! passes through `validate`, which names the offending field on failure.

use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::models::Role;
use crate::palindrome::Subject;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        None => Err(ApiError::Validation(format!("\"{}\" is required", field))),
        Some(v) if v.is_empty() => Err(ApiError::Validation(format!(
            "\"{}\" is not allowed to be empty",
            field
        ))),
        Some(v) => Ok(v),
    }
}

/// Body of POST /messages and PUT /messages/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub content: Option<String>,
}

impl MessageRequest {
    /// `content` must be present and non-empty.
    pub fn validate(self) -> Result<String> {
        required("content", self.content)
    }
}

/// Body of POST /messages/test/palindrome
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PalindromeRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PalindromeRequest {
    /// Exactly one of `id` and `content` must be supplied.
    pub fn validate(self) -> Result<Subject> {
        match (self.id, self.content) {
            (Some(_), Some(_)) => Err(ApiError::Validation(
                "\"id\" and \"content\" are mutually exclusive, supply only one".to_string(),
            )),
            (None, None) => Err(ApiError::Validation(
                "One of \"id\" or \"content\" is required".to_string(),
            )),
            (Some(id), None) => required("id", Some(id)).map(Subject::MessageId),
            (None, Some(content)) => required("content", Some(content)).map(Subject::Content),
        }
    }
}

/// Body of POST /auth/register
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A registration that passed validation. Email is lowercased.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<Registration> {
        let name = required("name", self.name.map(|n| n.trim().to_string()))?;
        let email = required("email", self.email.map(|e| e.trim().to_lowercase()))?;
        if !looks_like_email(&email) {
            return Err(ApiError::Validation(
                "\"email\" must be a valid email".to_string(),
            ));
        }
        let password = required("password", self.password)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::Validation(format!(
                "\"password\" length must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Body of POST /auth/login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)` with the email normalized for lookup.
    pub fn validate(self) -> Result<(String, String)> {
        let email = required("email", self.email.map(|e| e.trim().to_lowercase()))?;
        let password = required("password", self.password)?;
        Ok((email, password))
    }
}

/// Body of PUT /users/:id/role
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleRequest {
    #[serde(default)]
    pub role: Option<String>,
}

impl RoleRequest {
    pub fn validate(self) -> Result<Role> {
        required("role", self.role)?
            .parse()
            .map_err(ApiError::Validation)
    }
}
