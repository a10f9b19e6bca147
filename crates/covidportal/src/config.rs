use std::time::Duration;

use clap::Args;

use covidportal_auth::{AuthConfig, AuthError};

/// Storage and token settings. Every flag can also be set from the environment.
#[derive(Args, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    #[arg(long, default_value = "covid19IndiaPortal.db", env = "DATABASE_PATH")]
    pub database: String,

    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued tokens in seconds (tokens never expire when unset)
    #[arg(long, env = "TOKEN_TTL_SECONDS")]
    pub token_ttl_seconds: Option<u64>,
}

impl Config {
    /// Get the token lifetime as a Duration.
    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_seconds.map(Duration::from_secs)
    }

    /// Build the auth configuration, rejecting an empty secret.
    pub fn auth_config(&self) -> Result<AuthConfig, AuthError> {
        AuthConfig::new(self.jwt_secret.clone(), self.token_ttl())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database", &self.database)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}
