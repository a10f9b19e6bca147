use axum::{
    extract::{Path, State},
    Json,
};

use covidportal_auth::CurrentUser;
use covidportal_core::region::{State as Region, StateStats};
use covidportal_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all states (GET /states/).
pub async fn list_states(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Region>>, AppError> {
    tracing::debug!(%username, "Received list states request");

    let states = state.state_repo.list_states().await?;

    Ok(Json(states))
}

/// Get a single state by ID (GET /states/{state_id}/).
pub async fn get_state(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> Result<Json<Region>, AppError> {
    tracing::debug!(%username, state_id, "Received get state request");

    match state.state_repo.get_state(state_id).await? {
        Some(region) => Ok(Json(region)),
        None => Err(RepositoryError::not_found("State", state_id).into()),
    }
}

/// Case totals over the districts of a state (GET /states/{state_id}/stats/).
pub async fn get_state_stats(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> Result<Json<StateStats>, AppError> {
    tracing::debug!(%username, state_id, "Received state stats request");

    let stats = state.state_repo.get_state_stats(state_id).await?;

    Ok(Json(stats))
}
