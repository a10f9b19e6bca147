//! SQLite storage backend implementation.
//!
//! A single `rusqlite` connection owned by a `tokio-rusqlite` worker thread.
//! Every statement is queued to that thread, so statements never run
//! concurrently.

mod conversions;
mod database;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
