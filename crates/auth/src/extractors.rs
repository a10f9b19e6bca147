//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use covidportal_core::auth::{bearer_token, AuthError as CoreError};

use crate::error::AuthError;
use crate::AuthState;

/// Extractor for the authenticated caller. Rejects with 401 `Invalid JWT Token`.
///
/// Put it first in a handler's argument list so the gate runs before path
/// and body extraction. On success the user is also inserted into the
/// request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(CoreError::MissingToken)?;

        let claims = auth_state.tokens.verify(token)?;
        tracing::trace!(username = %claims.username, "Allowing user");

        let user = CurrentUser {
            username: claims.username,
        };
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}
