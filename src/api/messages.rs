//! Message handlers
//!
//! Each handler runs its validation policy first, then the access-control
//! chain, then the repository call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::api::extract::Payload;
use crate::api::AppState;
use crate::auth::{Credentials, Identity};
use crate::error::{ApiError, Result};
use crate::models::{
    DeletedPayload, Envelope, MessagePayload, MessageRequest, MessagesPayload, PalindromePayload,
    PalindromeRequest,
};

fn message_id(raw: &str, missing: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(missing.to_string()))
}

/// Handler for GET /messages and GET /messages/all
pub async fn list_messages(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Envelope<MessagesPayload>>> {
    let owner = state
        .users
        .find_by_id(identity.user_id)
        .await
        .ok_or(ApiError::UserNotFound)?
        .public();

    let messages = state
        .messages
        .list_by_creator(identity.user_id)
        .await
        .into_iter()
        .map(|m| m.with_creator(owner.clone()))
        .collect();

    Ok(Json(Envelope::ok(MessagesPayload { messages })))
}

/// Handler for POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    credentials: Credentials,
    Payload(req): Payload<MessageRequest>,
) -> Result<(StatusCode, Json<Envelope<MessagePayload>>)> {
    let content = req.validate()?;
    let identity = state.access.authenticate(&credentials).await?;

    let message = state.messages.create(identity.user_id, content).await?;
    info!(message_id = %message.id, user_id = %identity.user_id, "message created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(MessagePayload::created(message))),
    ))
}

/// Handler for PUT /messages/:id
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    credentials: Credentials,
    Payload(req): Payload<MessageRequest>,
) -> Result<Json<Envelope<MessagePayload>>> {
    let content = req.validate()?;
    let identity = state.access.authenticate(&credentials).await?;

    let id = message_id(&id, "Message does not exist")?;
    let message = state
        .messages
        .update_owned(id, identity.user_id, Some(content))
        .await?;
    info!(message_id = %message.id, user_id = %identity.user_id, "message updated");

    Ok(Json(Envelope::ok(MessagePayload::updated(message))))
}

/// Handler for DELETE /messages/:id
pub async fn remove_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Identity,
) -> Result<Json<Envelope<DeletedPayload>>> {
    let id = message_id(&id, "Message not found or has been deleted")?;
    let deleted = state.messages.delete_owned(id, identity.user_id).await?;
    info!(message_id = %deleted.id, user_id = %identity.user_id, "message removed");

    Ok(Json(Envelope::ok(DeletedPayload { deleted })))
}

/// Handler for POST /messages/test/palindrome. Open to anyone.
pub async fn test_palindrome(
    State(state): State<AppState>,
    Payload(req): Payload<PalindromeRequest>,
) -> Result<Json<Envelope<PalindromePayload>>> {
    let subject = req.validate()?;
    let verdict = state.palindrome.check(subject).await?;

    Ok(Json(Envelope::ok(PalindromePayload::new(
        verdict.result,
        verdict.from_cache,
    ))))
}
