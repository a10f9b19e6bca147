use async_trait::async_trait;

use crate::auth::UserCredential;
use crate::region::{District, DistrictPatch, NewDistrict, State, StateStats};

use super::Result;

/// Repository for state operations.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Gets every state ordered by ascending id.
    async fn list_states(&self) -> Result<Vec<State>>;

    /// Gets a state by its ID.
    async fn get_state(&self, state_id: i64) -> Result<Option<State>>;

    /// Sums the case counters of every district that belongs to the state.
    ///
    /// A state without districts, known or not, yields all zeros.
    async fn get_state_stats(&self, state_id: i64) -> Result<StateStats>;
}

/// Repository for district operations.
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Gets a district by its ID.
    async fn get_district(&self, district_id: i64) -> Result<Option<District>>;

    /// Inserts a new district and returns the generated ID.
    async fn create_district(&self, district: &NewDistrict) -> Result<i64>;

    /// Merges `patch` into the stored district and writes the result back.
    ///
    /// Returns `NotFound` if the district does not exist.
    async fn update_district(&self, district_id: i64, patch: DistrictPatch) -> Result<District>;

    /// Deletes a district by its ID and returns the number of rows removed.
    ///
    /// Deleting a missing district is not an error.
    async fn delete_district(&self, district_id: i64) -> Result<usize>;
}

/// Read-only access to login credentials.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets the credential record for an exact username match.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<UserCredential>>;
}
