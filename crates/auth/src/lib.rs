//! Password login and bearer token authentication for covidportal.
//!
//! This crate provides:
//! - HS256 token issuing and verification
//! - bcrypt password verification off the async workers
//! - The `POST /login/` route
//! - An axum extractor guarding every other route

mod config;
mod error;
mod extractors;
mod handlers;
mod password;
mod state;
mod tokens;

pub use config::AuthConfig;
pub use error::{AuthError, INVALID_TOKEN_MESSAGE};
pub use extractors::CurrentUser;
pub use handlers::auth_routes;
pub use password::{hash_password, verify_password};
pub use state::AuthState;
pub use tokens::TokenSigner;
