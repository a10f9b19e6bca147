//! SQLite repository implementation.
//!
//! Implements the repository traits from `covidportal_core::storage` on top of
//! the [`Database`] accessor.

use async_trait::async_trait;
use rusqlite::types::Value;

use covidportal_core::auth::UserCredential;
use covidportal_core::region::{District, DistrictPatch, NewDistrict, State, StateStats};
use covidportal_core::storage::{
    DistrictRepository, RepositoryError, Result, StateRepository, UserRepository,
};

use super::conversions::{
    district_update_params, new_district_params, row_to_district, row_to_state, row_to_stats,
    row_to_user_credential,
};
use super::database::Database;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Missing tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let db = Database::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&db).await?;

        Ok(Self { db })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is closed.
    pub async fn new_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&db).await?;

        Ok(Self { db })
    }

    /// Initialize the database schema.
    async fn init_schema(db: &Database) -> Result<()> {
        db.execute_batch(schema::CREATE_TABLES)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// The underlying storage accessor.
    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Closes the connection. Every later call fails with `ConnectionFailed`.
    pub async fn close(&self) -> Result<()> {
        self.db
            .close()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

// ============================================================================
// StateRepository implementation
// ============================================================================

#[async_trait]
impl StateRepository for SqliteRepository {
    async fn list_states(&self) -> Result<Vec<State>> {
        self.db
            .query_all(schema::SELECT_ALL_STATES, Vec::new(), row_to_state)
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "State"))
    }

    async fn get_state(&self, state_id: i64) -> Result<Option<State>> {
        self.db
            .query_one(
                schema::SELECT_STATE_BY_ID,
                vec![Value::Integer(state_id)],
                row_to_state,
            )
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "State", state_id.to_string()))
    }

    async fn get_state_stats(&self, state_id: i64) -> Result<StateStats> {
        // The aggregate always yields exactly one row.
        let stats = self
            .db
            .query_one(
                schema::SELECT_STATE_STATS,
                vec![Value::Integer(state_id)],
                row_to_stats,
            )
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "State", state_id.to_string()))?;

        Ok(stats.unwrap_or_default())
    }
}

// ============================================================================
// DistrictRepository implementation
// ============================================================================

#[async_trait]
impl DistrictRepository for SqliteRepository {
    async fn get_district(&self, district_id: i64) -> Result<Option<District>> {
        self.db
            .query_one(
                schema::SELECT_DISTRICT_BY_ID,
                vec![Value::Integer(district_id)],
                row_to_district,
            )
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "District", district_id.to_string()))
    }

    async fn create_district(&self, district: &NewDistrict) -> Result<i64> {
        self.db
            .insert(schema::INSERT_DISTRICT, new_district_params(district))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "District"))
    }

    async fn update_district(&self, district_id: i64, patch: DistrictPatch) -> Result<District> {
        let existing = self
            .get_district(district_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("District", district_id))?;

        let updated = patch.apply_to(&existing);

        let rows_affected = self
            .db
            .execute(schema::UPDATE_DISTRICT, district_update_params(&updated))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "District", district_id.to_string()))?;

        // Deleted between the read and the write.
        if rows_affected == 0 {
            return Err(RepositoryError::not_found("District", district_id));
        }

        Ok(updated)
    }

    async fn delete_district(&self, district_id: i64) -> Result<usize> {
        self.db
            .execute(schema::DELETE_DISTRICT, vec![Value::Integer(district_id)])
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "District", district_id.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<UserCredential>> {
        self.db
            .query_one(
                schema::SELECT_USER_BY_USERNAME,
                vec![Value::Text(username.to_string())],
                row_to_user_credential,
            )
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", username))
    }
}
