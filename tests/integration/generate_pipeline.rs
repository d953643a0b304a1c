//! Generate pipeline: config -> assembler -> silver and gold tiers.

use anyhow::Result;
use calendar_dimension::database::{Database, DimensionOperations};
use calendar_dimension::errors::AppError;
use calendar_dimension::processor::generate;
use calendar_dimension::types::statistics::StatisticsCollector;

use crate::common::{scratch_config, ymd};

#[test]
fn test_three_day_range_writes_both_tiers() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = scratch_config(dir.path(), "2024-01-01", "2024-01-03");

    let stats = generate(&config)?;
    assert_eq!(stats.dates_in_range, 3);
    assert_eq!(stats.distinct_rows(), 3);
    assert!(stats.summary().contains("3 dates"));

    for tier in [&config.output.silver, &config.output.gold] {
        let db = Database::open_path(&tier.database_path)?;
        let db_stats = db.get_dimension_stats(&tier.table)?;
        assert_eq!(db_stats.total_rows, 3);
        assert_eq!(db_stats.min_date, Some(ymd(2024, 1, 1)));
        assert_eq!(db_stats.max_date, Some(ymd(2024, 1, 3)));
        assert!(db_stats.is_contiguous());
    }
    Ok(())
}

#[test]
fn test_stored_rows_match_direct_derivation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = scratch_config(dir.path(), "2024-02-27", "2024-03-02");
    generate(&config)?;

    let gold = Database::open_path(&config.output.gold.database_path)?;
    let stored = gold
        .fetch_record(&config.output.gold.table, 20240229)?
        .expect("leap day stored");
    assert_eq!(stored, calendar_dimension::calendar::derive(ymd(2024, 2, 29)));
    assert_eq!(stored.calendar_month_days, 29);
    assert_eq!(stored.calendar_year_days, 366);

    assert!(gold.fetch_record(&config.output.gold.table, 20240303)?.is_none());
    Ok(())
}

#[test]
fn test_rerun_replaces_previous_dataset() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wide = scratch_config(dir.path(), "2023-01-01", "2023-12-31");
    generate(&wide)?;

    let narrow = scratch_config(dir.path(), "2024-06-01", "2024-06-10");
    generate(&narrow)?;

    let silver = Database::open_path(&narrow.output.silver.database_path)?;
    let db_stats = silver.get_dimension_stats(&narrow.output.silver.table)?;
    assert_eq!(db_stats.total_rows, 10);
    assert_eq!(db_stats.min_date, Some(ymd(2024, 6, 1)));
    Ok(())
}

#[test]
fn test_invalid_range_fails_before_any_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = scratch_config(dir.path(), "2024-03-01", "2024-02-01");

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(!config.output.silver.database_path.exists());
    assert!(!config.output.gold.database_path.exists());
    Ok(())
}

#[test]
fn test_malformed_date_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = scratch_config(dir.path(), "2024-13-01", "2024-12-31");

    assert!(matches!(
        generate(&config),
        Err(AppError::InvalidDate { .. })
    ));
    assert!(!config.output.gold.database_path.exists());
    Ok(())
}

#[test]
fn test_invalid_table_name_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = scratch_config(dir.path(), "2024-01-01", "2024-01-03");
    config.output.gold.table = "dim date".to_string();

    assert!(matches!(generate(&config), Err(AppError::Config(_))));
    assert!(!config.output.silver.database_path.exists());
    Ok(())
}
