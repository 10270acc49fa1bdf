//! Administrative user handlers, behind the role gates.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::api::extract::Payload;
use crate::api::AppState;
use crate::auth::{Credentials, Identity};
use crate::error::{ApiError, Result};
use crate::models::{Envelope, RoleRequest, UserPayload, UsersPayload};

/// Handler for GET /users (admin)
pub async fn list_users(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Envelope<UsersPayload>>> {
    identity.require_admin()?;

    let users = state.users.list().await.iter().map(|u| u.public()).collect();
    Ok(Json(Envelope::ok(UsersPayload { users })))
}

/// Handler for PUT /users/:id/role (super-admin)
pub async fn change_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    credentials: Credentials,
    Payload(req): Payload<RoleRequest>,
) -> Result<Json<Envelope<UserPayload>>> {
    let role = req.validate()?;
    let identity = state.access.authenticate(&credentials).await?;
    identity.require_super_admin()?;

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("User not found".to_string()))?;
    let user = state.users.set_role(id, role).await?;
    info!(user_id = %user.id, %role, by = %identity.user_id, "role changed");

    Ok(Json(Envelope::ok(UserPayload {
        user: user.public(),
    })))
}
