//! Persistence Module
//!
//! In-process repositories for users and messages. Uniqueness and ownership
//! checks run under each store's write lock.

mod messages;
mod users;

pub use messages::MessageStore;
pub use users::{NewUser, UserStore};
