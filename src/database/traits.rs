//! Database trait abstractions for dimension persistence.

use crate::database::DimensionStats;
use crate::errors::AppResult;
use crate::types::record::CalendarDateRecord;

/// Batching and progress settings for dimension writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Rows per insert batch
    pub batch_size: usize,
    /// Rows between progress log lines
    pub progress_interval: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            batch_size: 10_000,
            progress_interval: 100_000,
        }
    }
}

/// Core database connection access
pub trait DatabaseConnection {
    /// Get a reference to the underlying SQLite connection
    fn connection(&self) -> &rusqlite::Connection;
}

/// Calendar dimension table operations
pub trait DimensionOperations {
    /// Replace the table's contents with `rows` in a single transaction.
    ///
    /// The previous table is dropped and recreated, so a failed write leaves
    /// the old dataset untouched. Returns the number of rows inserted.
    fn replace_dimension(
        &mut self,
        table: &str,
        rows: &[CalendarDateRecord],
        options: &WriteOptions,
    ) -> AppResult<usize>;

    /// Number of rows currently stored in the table
    fn count_rows(&self, table: &str) -> AppResult<usize>;

    /// Read one row back by its `calendar_date_key`
    fn fetch_record(&self, table: &str, key: i32) -> AppResult<Option<CalendarDateRecord>>;

    /// Row count and key span of the table
    fn get_dimension_stats(&self, table: &str) -> AppResult<DimensionStats>;
}
