//! SQLite schema definitions and SQL query constants.
//!
//! Every value is bound through a `?N` placeholder.

/// SQL statement to create all tables.
///
/// Existing tables are left as they are, including any extra columns.
pub const CREATE_TABLES: &str = r#"
-- States table
CREATE TABLE IF NOT EXISTS state (
    state_id INTEGER PRIMARY KEY,
    state_name TEXT NOT NULL,
    population INTEGER NOT NULL
);

-- Districts table (state_id is not a foreign key)
CREATE TABLE IF NOT EXISTS district (
    district_id INTEGER PRIMARY KEY AUTOINCREMENT,
    district_name TEXT NOT NULL,
    state_id INTEGER NOT NULL,
    cases INTEGER NOT NULL,
    cured INTEGER NOT NULL,
    active INTEGER NOT NULL,
    deaths INTEGER NOT NULL
);

-- Login credentials
CREATE TABLE IF NOT EXISTS user (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_district_state_id ON district(state_id);
"#;

// State queries
pub const SELECT_ALL_STATES: &str = r#"
SELECT state_id, state_name, population
FROM state
ORDER BY state_id ASC
"#;

pub const SELECT_STATE_BY_ID: &str = r#"
SELECT state_id, state_name, population
FROM state
WHERE state_id = ?1
"#;

pub const SELECT_STATE_STATS: &str = r#"
SELECT
    COALESCE(SUM(cases), 0),
    COALESCE(SUM(cured), 0),
    COALESCE(SUM(active), 0),
    COALESCE(SUM(deaths), 0)
FROM district
WHERE state_id = ?1
"#;

// District queries
pub const INSERT_DISTRICT: &str = r#"
INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_DISTRICT_BY_ID: &str = r#"
SELECT district_id, district_name, state_id, cases, cured, active, deaths
FROM district
WHERE district_id = ?1
"#;

pub const UPDATE_DISTRICT: &str = r#"
UPDATE district
SET district_name = ?2, state_id = ?3, cases = ?4, cured = ?5, active = ?6, deaths = ?7
WHERE district_id = ?1
"#;

pub const DELETE_DISTRICT: &str = r#"
DELETE FROM district
WHERE district_id = ?1
"#;

// User queries
pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT username, password
FROM user
WHERE username = ?1
"#;
