use std::time::Duration;

use crate::error::AuthError;

/// Complete auth configuration.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Lifetime of issued tokens. `None` issues tokens without expiry.
    pub token_ttl: Option<Duration>,
}

impl AuthConfig {
    /// Builds the configuration, rejecting an empty secret.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if `jwt_secret` is empty or whitespace.
    pub fn new(jwt_secret: impl Into<String>, token_ttl: Option<Duration>) -> Result<Self, AuthError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.trim().is_empty() {
            return Err(AuthError::Config("JWT secret must not be empty".to_string()));
        }

        Ok(Self {
            jwt_secret,
            token_ttl,
        })
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
