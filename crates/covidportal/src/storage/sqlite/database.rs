//! Storage accessor over the single SQLite connection.
//!
//! Each call is one statement with bound parameters. Calls are queued to the
//! connection's worker thread and run one at a time.

use rusqlite::{params_from_iter, types::Value, Row};
use tokio_rusqlite::Connection;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Owned handle to the process-wide database connection.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the database file at `path`, creating it if missing.
    pub async fn open(path: &str) -> tokio_rusqlite::Result<Self> {
        let conn = Connection::open(path).await?;
        Ok(Self { conn })
    }

    /// Opens a private in-memory database.
    pub async fn open_in_memory() -> tokio_rusqlite::Result<Self> {
        let conn = Connection::open_in_memory().await?;
        Ok(Self { conn })
    }

    /// Runs a batch of parameterless statements, e.g. schema creation.
    pub async fn execute_batch(&self, sql: &'static str) -> tokio_rusqlite::Result<()> {
        self.conn
            .call(move |conn| conn.execute_batch(sql).map_err(wrap_err))
            .await
    }

    /// Runs a query and maps every returned row.
    pub async fn query_all<T, F>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        map_row: F,
    ) -> tokio_rusqlite::Result<Vec<T>>
    where
        T: Send + 'static,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(params), map_row)
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
    }

    /// Runs a query and maps the first row, if any.
    pub async fn query_one<T, F>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        map_row: F,
    ) -> tokio_rusqlite::Result<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(sql).map_err(wrap_err)?;
                match stmt.query_row(params_from_iter(params), map_row) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
    }

    /// Runs a statement and returns the number of rows it changed.
    pub async fn execute(&self, sql: &'static str, params: Vec<Value>) -> tokio_rusqlite::Result<usize> {
        self.conn
            .call(move |conn| {
                conn.execute(sql, params_from_iter(params))
                    .map_err(wrap_err)
            })
            .await
    }

    /// Runs an `INSERT` and returns the rowid of the new row.
    pub async fn insert(&self, sql: &'static str, params: Vec<Value>) -> tokio_rusqlite::Result<i64> {
        self.conn
            .call(move |conn| {
                conn.execute(sql, params_from_iter(params))
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// Closes the connection. Later calls on any clone fail with `ConnectionClosed`.
    pub async fn close(&self) -> tokio_rusqlite::Result<()> {
        self.conn.clone().close().await
    }
}
