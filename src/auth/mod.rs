//! Auth Module
//!
//! Password hashing, signed tokens, server-side sessions and the access
//! control chain that ties them together.

mod access;
mod password;
mod session;
mod token;

pub use access::{AccessControl, Credentials, Identity, ACCESS_TOKEN_HEADER};
pub use password::{check_password, hash_password};
pub use session::{
    expired_session_cookie, session_cookie, SessionData, SessionStore, SESSION_COOKIE,
};
pub use token::{Claims, TokenService};
