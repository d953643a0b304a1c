//! SQLite persistence for the calendar dimension.
//!
//! Each output tier (silver, gold) is a SQLite database holding one
//! dimension table. The `Database` struct implements
//! `DimensionOperations` for full-replace writes and read-back checks.

pub mod operations;
pub mod schema;
pub mod statistics;
pub mod traits;

pub use statistics::DimensionStats;
pub use traits::*;

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// The main database interface for a single output tier.
///
/// Holds a SQLite connection; dimension tables are created on write, so
/// opening a database does not touch its schema.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open (or create) a database file. `":memory:"` opens an in-memory database.
    pub fn new(database_path: &str) -> AppResult<Self> {
        let connection = Connection::open(database_path)?;

        info!("Database opened at: {}", database_path);
        Ok(Self { connection })
    }

    /// Open a database file, creating missing parent directories first
    pub fn open_path(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::new(&path.to_string_lossy())
    }

    /// Execute a function within a database transaction
    pub fn execute_transaction<F, R>(&mut self, f: F) -> AppResult<R>
    where
        F: FnOnce(&rusqlite::Transaction) -> AppResult<R>,
    {
        let tx = self.connection.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}

impl DatabaseConnection for Database {
    fn connection(&self) -> &Connection {
        &self.connection
    }
}
