//! Palindrome Messages - authenticated message CRUD API
//!
//! Users own short text messages; anyone can ask whether a string or a stored
//! message is a palindrome, with verdicts cached by content digest.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod palindrome;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
