//! SQLite store for owners, pets, vets and visits.
//!
//! [`Database`] is the only implementation of the repository traits in
//! [`crate::repository`]. Each table has its own submodule holding the
//! `impl Database` queries for it.

mod owners;
mod pets;
mod schema;
mod seed;
mod vets;
mod visits;

pub use schema::SCHEMA;

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Failures reported by the store.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored JSON column (vet specialties) could not be read or written.
    #[error("Malformed JSON column: {0}")]
    Json(#[from] serde_json::Error),

    /// An in-place update matched no row.
    #[error("Record not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// A clinic store backed by one SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the clinic file at `path`, creating the file and tables if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::with_schema(Connection::open(path)?)
    }

    /// A private in-memory store; its contents vanish when dropped.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::with_schema(Connection::open_in_memory()?)
    }

    fn with_schema(conn: Connection) -> DbResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// The underlying connection, for queries the repository traits do not cover.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Number of stored visits across all pets.
    pub fn count_visits(&self) -> DbResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM visits", [], |row| row.get(0))
            .map_err(Into::into)
    }
}
