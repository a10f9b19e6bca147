//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Column order follows the `SELECT` lists in [`super::schema`].

use covidportal_core::auth::UserCredential;
use covidportal_core::region::{District, NewDistrict, State, StateStats};
use rusqlite::{types::Value, Row};

// ============================================================================
// State conversions
// ============================================================================

/// Convert a SQLite row to a State.
///
/// Expected columns: state_id, state_name, population
pub fn row_to_state(row: &Row) -> rusqlite::Result<State> {
    Ok(State {
        state_id: row.get(0)?,
        state_name: row.get(1)?,
        population: row.get(2)?,
    })
}

/// Convert an aggregate row to StateStats.
///
/// Expected columns: cases, cured, active, deaths (already summed)
pub fn row_to_stats(row: &Row) -> rusqlite::Result<StateStats> {
    Ok(StateStats {
        total_cases: row.get(0)?,
        total_cured: row.get(1)?,
        total_active: row.get(2)?,
        total_deaths: row.get(3)?,
    })
}

// ============================================================================
// District conversions
// ============================================================================

/// Convert a SQLite row to a District.
///
/// Expected columns: district_id, district_name, state_id, cases, cured, active, deaths
pub fn row_to_district(row: &Row) -> rusqlite::Result<District> {
    Ok(District {
        district_id: row.get(0)?,
        district_name: row.get(1)?,
        state_id: row.get(2)?,
        cases: row.get(3)?,
        cured: row.get(4)?,
        active: row.get(5)?,
        deaths: row.get(6)?,
    })
}

/// Bound values for `INSERT_DISTRICT`, in placeholder order.
pub fn new_district_params(district: &NewDistrict) -> Vec<Value> {
    vec![
        Value::Text(district.district_name.clone()),
        Value::Integer(district.state_id),
        Value::Integer(district.cases),
        Value::Integer(district.cured),
        Value::Integer(district.active),
        Value::Integer(district.deaths),
    ]
}

/// Bound values for `UPDATE_DISTRICT`: the id first, then the six mutable fields.
pub fn district_update_params(district: &District) -> Vec<Value> {
    vec![
        Value::Integer(district.district_id),
        Value::Text(district.district_name.clone()),
        Value::Integer(district.state_id),
        Value::Integer(district.cases),
        Value::Integer(district.cured),
        Value::Integer(district.active),
        Value::Integer(district.deaths),
    ]
}

// ============================================================================
// User conversions
// ============================================================================

/// Convert a SQLite row to a UserCredential.
///
/// Expected columns: username, password
pub fn row_to_user_credential(row: &Row) -> rusqlite::Result<UserCredential> {
    Ok(UserCredential {
        username: row.get(0)?,
        password_hash: row.get(1)?,
    })
}
