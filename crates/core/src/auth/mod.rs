mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{bearer_token, claims_for, is_token_expired};
pub use types::{LoginRequest, LoginResponse, TokenClaims, UserCredential};
