//! CSV export alongside the SQLite tiers.

use anyhow::Result;
use calendar_dimension::processor::generate;
use calendar_dimension::types::{CalendarDateRecord, COLUMNS};

use crate::common::scratch_config;

#[test]
fn test_csv_export_has_header_and_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let csv_path = dir.path().join("export").join("calendar_date.csv");
    let mut config = scratch_config(dir.path(), "2024-12-29", "2025-01-04");
    config.output.csv_path = Some(csv_path.clone());

    let stats = generate(&config)?;
    assert_eq!(stats.tier_writes.len(), 3);
    assert_eq!(stats.tier_writes[2].tier, "csv");

    let mut reader = csv::Reader::from_path(&csv_path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let expected: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(header, expected);

    let records: Vec<CalendarDateRecord> = reader.deserialize().collect::<Result<_, _>>()?;
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].calendar_date_key, 20241229);
    // Year-end week keeps the calendar year, not the ISO week-year
    assert_eq!(records[2].calendar_year_week_number, "202401");
    Ok(())
}

#[test]
fn test_csv_export_overwritten_on_rerun() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let csv_path = dir.path().join("calendar_date.csv");

    let mut first = scratch_config(dir.path(), "2024-01-01", "2024-01-31");
    first.output.csv_path = Some(csv_path.clone());
    generate(&first)?;

    let mut second = scratch_config(dir.path(), "2024-01-01", "2024-01-02");
    second.output.csv_path = Some(csv_path.clone());
    generate(&second)?;

    let mut reader = csv::Reader::from_path(&csv_path)?;
    assert_eq!(reader.records().count(), 2);
    Ok(())
}
