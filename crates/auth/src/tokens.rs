//! HS256 bearer token issuing and verification.

use std::collections::HashSet;
use std::time::Duration;

use covidportal_core::auth::{
    claims_for, is_token_expired, AuthError as CoreError, TokenClaims,
};
use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Signs and verifies bearer tokens with the configured shared secret.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl TokenSigner {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        // Tokens may legitimately lack `exp`; expiry is checked after decoding.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: config.token_ttl,
        }
    }

    /// Issue a token for `username`, issued now.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, get_current_timestamp())
    }

    /// Issue a token for `username` with an explicit issued-at timestamp.
    pub fn issue_at(&self, username: &str, issued_at: u64) -> Result<String, AuthError> {
        let claims = claims_for(username, issued_at, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify signature and integrity of `token` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` for anything that does not decode and verify,
    /// `TokenExpired` for a verified token whose `exp` has passed.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| CoreError::InvalidToken(e.to_string()))?;

        if is_token_expired(&data.claims, get_current_timestamp()) {
            return Err(CoreError::TokenExpired.into());
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
