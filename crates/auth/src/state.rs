//! Application state for auth.

use std::sync::Arc;

use covidportal_core::storage::UserRepository;

use crate::config::AuthConfig;
use crate::tokens::TokenSigner;

/// Shared state for auth handlers and the token gate.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<TokenSigner>,
}

impl AuthState {
    pub fn new(users: Arc<dyn UserRepository>, config: &AuthConfig) -> Self {
        Self {
            users,
            tokens: Arc::new(TokenSigner::new(config)),
        }
    }
}
