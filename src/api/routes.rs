//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{auth, messages, service, users, AppState};

/// Prefix under which the API is mounted.
pub const API_PREFIX: &str = "/api/v1";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints (under `/api/v1`)
/// - `GET /` - Welcome message
/// - `GET /messages`, `GET /messages/all` - Caller's messages
/// - `POST /messages` - Create a message
/// - `PUT /messages/:id` - Update an owned message
/// - `DELETE /messages/:id` - Remove an owned message
/// - `POST /messages/test/palindrome` - Palindrome check, unauthenticated
/// - `POST /auth/register`, `POST /auth/login`, `POST /auth/logout`, `GET /auth/me`
/// - `GET /users` - All users (admin)
/// - `PUT /users/:id/role` - Change a role (super-admin)
///
/// `GET /health` is mounted at the root.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let message_routes = Router::new()
        .route(
            "/",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/all", get(messages::list_messages))
        .route(
            "/:id",
            put(messages::update_message).delete(messages::remove_message),
        )
        .route("/test/palindrome", post(messages::test_palindrome));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me));

    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/:id/role", put(users::change_role));

    let api = Router::new()
        .route("/", get(service::welcome))
        .nest("/messages", message_routes)
        .nest("/auth", auth_routes)
        .nest("/users", user_routes);

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(service::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
