//! Signed token issuance and verification (HS256 JWT).

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::User;

/// Claims carried by every issued token.
///
/// `auth_key` is the user's access-token at issuance, binding the token to one
/// session generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub auth_key: String,
    #[serde(default)]
    pub env: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// The subject as a user id. A missing or unparseable subject is a
    /// malformed token.
    pub fn user_id(&self) -> Result<Uuid> {
        self.sub
            .as_deref()
            .and_then(|sub| Uuid::parse_str(sub).ok())
            .ok_or(ApiError::MalformedToken)
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifespan_seconds: i64,
    env: String,
}

impl TokenService {
    pub fn new(secret: &str, lifespan_seconds: u64, env: impl Into<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifespan_seconds: i64::try_from(lifespan_seconds).unwrap_or(i64::MAX / 2),
            env: env.into(),
        }
    }

    /// Issues a token for `user` bound to the user's current access-token.
    pub fn issue(&self, user: &User) -> Result<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: Some(user.id.to_string()),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            auth_key: user.access_token.clone(),
            env: self.env.clone(),
            iat,
            exp: iat.saturating_add(self.lifespan_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Checks signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "token rejected");
                ApiError::InvalidToken
            })
    }
}
