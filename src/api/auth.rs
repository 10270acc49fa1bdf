//! Account handlers: register, login, logout, me.

use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use tracing::{info, warn};

use crate::api::extract::Payload;
use crate::api::AppState;
use crate::auth::{check_password, expired_session_cookie, hash_password, session_cookie, Identity};
use crate::error::{ApiError, Result};
use crate::models::{Envelope, LoginPayload, LoginRequest, RegisterRequest, Role, UserPayload};
use crate::store::NewUser;

/// Handler for POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Payload(req): Payload<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<UserPayload>>)> {
    let registration = req.validate()?;
    let password_hash = hash_password(&registration.password, state.config.salt_rounds).await?;

    let user = state
        .users
        .create(NewUser {
            name: registration.name,
            email: registration.email,
            password_hash,
            role: Role::Customer,
        })
        .await?;
    info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(UserPayload {
            user: user.public(),
        })),
    ))
}

/// Handler for POST /auth/login
///
/// Rotates the user's access-token, so any earlier session and token pair
/// stops working.
pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> Result<([(header::HeaderName, String); 1], Json<Envelope<LoginPayload>>)> {
    let (email, password) = req.validate()?;

    let user = state
        .users
        .find_by_email(&email)
        .await
        .ok_or(ApiError::InvalidCredentials)?;
    if !check_password(&password, &user.password_hash).await? {
        warn!(user_id = %user.id, "login rejected: wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.users.rotate_access_token(user.id).await?;
    let user = state
        .users
        .find_by_id(user.id)
        .await
        .ok_or(ApiError::UserNotFound)?;
    let session_id = state.sessions.create(user.id, access_token).await;
    let token = state.tokens.issue(&user)?;
    info!(user_id = %user.id, "user logged in");

    Ok((
        [(
            header::SET_COOKIE,
            session_cookie(&session_id, state.sessions.ttl_seconds()),
        )],
        Json(Envelope::ok(LoginPayload {
            token,
            user: user.public(),
        })),
    ))
}

/// Handler for POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<([(header::HeaderName, String); 1], Json<Envelope<()>>)> {
    state.users.rotate_access_token(identity.user_id).await?;
    state.sessions.destroy(&identity.session_id).await;
    info!(user_id = %identity.user_id, "user logged out");

    Ok((
        [(header::SET_COOKIE, expired_session_cookie())],
        Json(Envelope::message("Logged out successfully")),
    ))
}

/// Handler for GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Envelope<UserPayload>>> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(Envelope::ok(UserPayload {
        user: user.public(),
    })))
}
