use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    TokenExpired,

    #[error("Invalid user")]
    UnknownUser,

    #[error("Invalid password")]
    WrongPassword,
}

impl AuthError {
    /// Returns true for failures of the bearer token gate.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::InvalidToken(_) | Self::TokenExpired
        )
    }
}
