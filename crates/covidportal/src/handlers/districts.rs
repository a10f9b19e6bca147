use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use covidportal_auth::CurrentUser;
use covidportal_core::region::{District, DistrictPatch, NewDistrict};
use covidportal_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

pub const DISTRICT_ADDED: &str = "District Successfully Added";
pub const DISTRICT_UPDATED: &str = "District Details Updated";
pub const DISTRICT_REMOVED: &str = "District Removed";

// ============================================================================
// Create District
// ============================================================================

/// Create a new district (POST /districts/).
///
/// Every field is required. The new id is not returned.
pub async fn create_district(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<NewDistrict>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(district) = payload?;

    let district_id = state.district_repo.create_district(&district).await?;

    tracing::info!(
        %username,
        district_id,
        district_name = %district.district_name,
        "Created new district"
    );

    Ok(DISTRICT_ADDED)
}

// ============================================================================
// Get District
// ============================================================================

/// Get a single district by ID (GET /districts/{district_id}/).
pub async fn get_district(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> Result<Json<District>, AppError> {
    tracing::debug!(%username, district_id, "Received get district request");

    match state.district_repo.get_district(district_id).await? {
        Some(district) => Ok(Json(district)),
        None => Err(RepositoryError::not_found("District", district_id).into()),
    }
}

// ============================================================================
// Update District
// ============================================================================

/// Update a district by ID (PUT /districts/{district_id}/).
///
/// Fields missing from the body keep their stored values.
pub async fn update_district(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
    payload: Result<Json<DistrictPatch>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(patch) = payload?;
    tracing::debug!(%username, district_id, ?patch, "Received update district request");

    state
        .district_repo
        .update_district(district_id, patch)
        .await?;

    tracing::info!(%username, district_id, "Updated district");

    Ok(DISTRICT_UPDATED)
}

// ============================================================================
// Delete District
// ============================================================================

/// Delete a district by ID (DELETE /districts/{district_id}/).
///
/// Deleting a missing district still succeeds.
pub async fn delete_district(
    CurrentUser { username }: CurrentUser,
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> Result<&'static str, AppError> {
    tracing::debug!(%username, district_id, "Received delete district request");

    let rows_affected = state.district_repo.delete_district(district_id).await?;

    tracing::info!(%username, district_id, rows_affected, "Deleted district");

    Ok(DISTRICT_REMOVED)
}
