//! API Module
//!
//! HTTP handlers and routing for the messages REST API.

pub mod auth;
pub mod extract;
pub mod messages;
pub mod routes;
pub mod service;
pub mod state;
pub mod users;

pub use routes::{create_router, API_PREFIX};
pub use state::AppState;
