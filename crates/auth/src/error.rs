use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use covidportal_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// Body of every 401 produced by the bearer token gate.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid JWT Token";

/// Auth errors for the covidportal_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants
/// for I/O operations that can't be in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (token gate, credential checks)
    #[error(transparent)]
    Core(#[from] covidportal_core::auth::AuthError),

    /// Malformed login request body
    #[error("{0}")]
    InvalidRequest(String),

    /// Token could not be signed
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Stored hash is unusable or the hashing task failed
    #[error("password verification failed: {0}")]
    Hashing(String),

    /// Credential lookup failed
    #[error(transparent)]
    Storage(#[from] RepositoryError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::Core(core_err) if core_err.is_token_rejection() => {
                tracing::debug!(reason = %core_err, "Rejected bearer token");
                (StatusCode::UNAUTHORIZED, INVALID_TOKEN_MESSAGE.to_string())
            }
            AuthError::Core(core_err) => {
                tracing::debug!(reason = %core_err, "Rejected login");
                (StatusCode::BAD_REQUEST, core_err.to_string())
            }
            AuthError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AuthError::Storage(repo_err) => {
                tracing::error!("Auth storage error: {}", repo_err);
                let status = StatusCode::from_u16(repository_error_to_status_code(repo_err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, repo_err.to_string())
            }
            AuthError::Signing(_) | AuthError::Hashing(_) | AuthError::Config(_) => {
                tracing::error!("Auth error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
