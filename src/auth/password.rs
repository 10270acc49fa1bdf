//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking pool.

use crate::error::Result;

/// Hashes `plain` with a fresh salt at the given bcrypt `cost`.
pub async fn hash_password(plain: &str, cost: u32) -> Result<String> {
    let plain = plain.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost)).await??;
    Ok(hashed)
}

/// Checks `plain` against a stored bcrypt `hash`.
pub async fn check_password(plain: &str, hash: &str) -> Result<bool> {
    let plain = plain.to_owned();
    let hash = hash.to_owned();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash)).await??;
    Ok(matches)
}
