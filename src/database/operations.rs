//! Calendar dimension table operations.
//!
//! `replace_dimension` performs a full-replace write:
//! 1. **Drop + create**: any previous table of that name is discarded
//! 2. **Insert**: every row, in batches, through one cached statement
//!
//! Both steps run in a single transaction.

use crate::config::validate_table_name;
use crate::database::schema::{insert_sql, recreate_dimension_table, table_exists};
use crate::database::traits::{DatabaseConnection, DimensionOperations, WriteOptions};
use crate::database::{Database, DimensionStats};
use crate::errors::{AppError, AppResult};
use crate::types::record::{column_list, CalendarDateRecord};
use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

impl DimensionOperations for Database {
    fn replace_dimension(
        &mut self,
        table: &str,
        rows: &[CalendarDateRecord],
        options: &WriteOptions,
    ) -> AppResult<usize> {
        if options.batch_size == 0 || options.progress_interval == 0 {
            return Err(AppError::Config(
                "Batch size and progress interval must be greater than 0".to_string(),
            ));
        }
        let insert = insert_sql(table)?;

        self.execute_transaction(|tx| {
            recreate_dimension_table(tx, table)?;

            let mut stmt = tx.prepare_cached(&insert)?;
            let mut inserted = 0;
            let mut next_report = options.progress_interval;

            for (batch_number, batch) in rows.chunks(options.batch_size).enumerate() {
                for record in batch {
                    inserted += stmt.execute(&record.sql_values()[..])?;
                }
                if inserted >= next_report {
                    info!("{}: {} / {} rows inserted", table, inserted, rows.len());
                    next_report = (inserted / options.progress_interval + 1) * options.progress_interval;
                }
                debug!(
                    "Inserted batch {} of {} rows into {} ({} total)",
                    batch_number + 1,
                    batch.len(),
                    table,
                    inserted
                );
            }

            Ok(inserted)
        })
    }

    fn count_rows(&self, table: &str) -> AppResult<usize> {
        validate_table_name(table)?;
        if !table_exists(self.connection(), table)? {
            return Ok(0);
        }

        let count: i64 =
            self.connection()
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }

    fn fetch_record(&self, table: &str, key: i32) -> AppResult<Option<CalendarDateRecord>> {
        validate_table_name(table)?;

        let sql = format!(
            "SELECT {} FROM {} WHERE calendar_date_key = ?1",
            column_list(),
            table
        );
        let record = self
            .connection()
            .query_row(&sql, params![key], CalendarDateRecord::from_row)
            .optional()?;
        Ok(record)
    }

    fn get_dimension_stats(&self, table: &str) -> AppResult<DimensionStats> {
        validate_table_name(table)?;
        if !table_exists(self.connection(), table)? {
            return Ok(DimensionStats {
                total_rows: 0,
                min_date: None,
                max_date: None,
            });
        }

        let sql = format!(
            "SELECT COUNT(*), MIN(calendar_date), MAX(calendar_date) FROM {}",
            table
        );
        let stats = self.connection().query_row(&sql, [], |row| {
            Ok(DimensionStats {
                total_rows: row.get::<_, i64>(0)? as usize,
                min_date: row.get(1)?,
                max_date: row.get(2)?,
            })
        })?;
        Ok(stats)
    }
}
