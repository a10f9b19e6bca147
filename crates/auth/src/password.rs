//! bcrypt password hashing.
//!
//! Hashing is CPU bound, so both helpers run on the blocking thread pool.

use crate::error::AuthError;

/// Check `password` against a stored bcrypt `hash`.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if the stored hash is not a valid bcrypt
/// string or the blocking task fails.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Hash `password` with the given bcrypt cost.
///
/// Users are provisioned outside the service; this is used to prepare
/// credential records.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}
