//! Storage backend implementations.
//!
//! This module provides the SQLite implementation of the repository traits
//! defined in `covidportal_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
