//! Calendar dimension table schema
//!
//! The table layout is generated from `types::record::COLUMNS` so the DDL,
//! the insert statement and the record struct cannot drift apart.
//!
//! Each tier holds one dimension table. A run drops and recreates it inside
//! the same transaction that inserts the new rows (full replace).

use crate::config::validate_table_name;
use crate::errors::AppResult;
use crate::types::record::{column_list, COLUMNS};
use rusqlite::Connection;
use tracing::debug;

/// CREATE TABLE statement for a calendar dimension table
pub fn create_table_sql(table: &str) -> AppResult<String> {
    validate_table_name(table)?;

    let columns = COLUMNS
        .iter()
        .map(|(name, sql_type)| format!("    {} {}", name, sql_type))
        .collect::<Vec<_>>()
        .join(",\n");

    Ok(format!("CREATE TABLE {} (\n{}\n)", table, columns))
}

/// INSERT statement binding every column positionally
pub fn insert_sql(table: &str) -> AppResult<String> {
    validate_table_name(table)?;

    let placeholders = (1..=COLUMNS.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        column_list(),
        placeholders
    ))
}

/// Drop any previous copy of the table and create it empty
///
/// Takes a `Connection` so it can run on a `Transaction` through deref.
pub fn recreate_dimension_table(connection: &Connection, table: &str) -> AppResult<()> {
    let create = create_table_sql(table)?;
    connection.execute_batch(&format!("DROP TABLE IF EXISTS {};\n{};", table, create))?;
    debug!("Recreated dimension table {}", table);
    Ok(())
}

/// Whether a table exists in the database
pub fn table_exists(connection: &Connection, table: &str) -> AppResult<bool> {
    let count: i64 = connection.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
