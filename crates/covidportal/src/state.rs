//! Shared application state.
//!
//! Holds repository trait objects for the handlers plus the owned SQLite
//! repository so the connection can be closed on shutdown.

use std::sync::Arc;

use axum::extract::FromRef;

use covidportal_auth::{AuthConfig, AuthState};
use covidportal_core::storage::{DistrictRepository, Result, StateRepository};

use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler. Every repository points at the
/// same connection.
#[derive(Clone)]
pub struct AppState {
    /// State repository (read-only).
    pub state_repo: Arc<dyn StateRepository>,
    /// District repository.
    pub district_repo: Arc<dyn DistrictRepository>,
    /// Token signer and credential lookup for the auth gate.
    pub auth: AuthState,
    /// Owner of the database connection.
    db: Arc<SqliteRepository>,
}

impl AppState {
    /// Creates AppState backed by a single SQLite repository.
    pub fn new(repo: SqliteRepository, auth_config: &AuthConfig) -> Self {
        let repo = Arc::new(repo);

        Self {
            state_repo: repo.clone(),
            district_repo: repo.clone(),
            auth: AuthState::new(repo.clone(), auth_config),
            db: repo,
        }
    }

    /// Closes the database connection shared by every repository.
    pub async fn close(&self) -> Result<()> {
        self.db.close().await
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
