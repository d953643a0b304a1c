//! Persistence collaborators for the assembled dimension.
//!
//! - `TierSink`: one named SQLite location (silver or gold)
//! - `CsvSink`: flat-file export of the same rows
//!
//! Every sink overwrites what it wrote on a previous run.

use crate::config::{AppConfig, TierConfig};
use crate::database::{Database, DimensionOperations, WriteOptions};
use crate::errors::{AppError, AppResult};
use crate::types::record::CalendarDateRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for a fully assembled dimension
pub trait DimensionSink {
    /// Short name used in logs and run summaries (e.g. "silver")
    fn name(&self) -> &str;

    /// Human-readable location (path and table)
    fn location(&self) -> String;

    /// Replace the sink's contents with `rows`, returning rows written
    fn write_dimension(&mut self, rows: &[CalendarDateRecord]) -> AppResult<usize>;
}

/// A SQLite tier holding one dimension table
pub struct TierSink {
    name: String,
    database_path: PathBuf,
    table: String,
    database: Database,
    options: WriteOptions,
}

impl TierSink {
    pub fn open(name: &str, tier: &TierConfig, options: WriteOptions) -> AppResult<Self> {
        let database = Database::open_path(&tier.database_path)?;
        Ok(Self {
            name: name.to_string(),
            database_path: tier.database_path.clone(),
            table: tier.table.clone(),
            database,
            options,
        })
    }

    /// Wrap an already-open database (used for in-memory tiers)
    pub fn with_database(
        name: &str,
        table: &str,
        database: Database,
        options: WriteOptions,
    ) -> Self {
        Self {
            name: name.to_string(),
            database_path: PathBuf::from(":memory:"),
            table: table.to_string(),
            database,
            options,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl DimensionSink for TierSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> String {
        format!("{}:{}", self.database_path.display(), self.table)
    }

    fn write_dimension(&mut self, rows: &[CalendarDateRecord]) -> AppResult<usize> {
        let written = self
            .database
            .replace_dimension(&self.table, rows, &self.options)?;

        // Read back to confirm the table holds exactly this run's rows
        let stored = self.database.count_rows(&self.table)?;
        if stored != rows.len() {
            return Err(AppError::InvalidData(format!(
                "{} holds {} rows after writing {}",
                self.location(),
                stored,
                rows.len()
            )));
        }

        info!("{} tier: {} rows written to {}", self.name, written, self.location());
        Ok(written)
    }
}

/// CSV export of the dimension, header row first
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DimensionSink for CsvSink {
    fn name(&self) -> &str {
        "csv"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// failed export never leaves a truncated CSV behind.
    fn write_dimension(&mut self, rows: &[CalendarDateRecord]) -> AppResult<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let mut writer = csv::Writer::from_path(&temp_path)?;
        for record in rows {
            writer.serialize(record)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)?;
        debug!("Renamed {} -> {}", temp_path.display(), self.path.display());

        info!("CSV export: {} rows written to {}", rows.len(), self.location());
        Ok(rows.len())
    }
}

/// Silver and gold tiers, plus the CSV export when one is configured
pub fn sinks_for(config: &AppConfig) -> AppResult<Vec<Box<dyn DimensionSink>>> {
    let options = WriteOptions {
        batch_size: config.processing.batch_size,
        progress_interval: config.processing.progress_interval,
    };

    let mut sinks: Vec<Box<dyn DimensionSink>> = vec![
        Box::new(TierSink::open("silver", &config.output.silver, options)?),
        Box::new(TierSink::open("gold", &config.output.gold, options)?),
    ];
    if let Some(csv_path) = &config.output.csv_path {
        sinks.push(Box::new(CsvSink::new(csv_path)));
    }
    Ok(sinks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{derive, DateRange};

    fn rows() -> Vec<CalendarDateRecord> {
        DateRange::parse("2024-01-01", "2024-01-03")
            .unwrap()
            .dates()
            .map(derive)
            .collect()
    }

    #[test]
    fn test_tier_sink_writes_and_verifies() {
        let database = Database::new(":memory:").unwrap();
        let mut sink =
            TierSink::with_database("silver", "calendar_date", database, WriteOptions::default());

        assert_eq!(sink.write_dimension(&rows()).unwrap(), 3);
        assert_eq!(sink.database().count_rows(sink.table()).unwrap(), 3);
        assert_eq!(sink.location(), ":memory::calendar_date");
    }

    #[test]
    fn test_tier_sink_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let tier = TierConfig {
            database_path: dir.path().join("gold").join("gold.db"),
            table: "dim_calendar_date".to_string(),
        };

        let mut sink = TierSink::open("gold", &tier, WriteOptions::default()).unwrap();
        sink.write_dimension(&rows()).unwrap();
        assert!(tier.database_path.exists());
    }

    #[test]
    fn test_csv_sink_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar_date.csv");
        fs::write(&path, "stale contents\n").unwrap();

        let mut sink = CsvSink::new(&path);
        assert_eq!(sink.write_dimension(&rows()).unwrap(), 3);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<CalendarDateRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(records, rows());
        assert!(!dir.path().join("calendar_date.csv.tmp").exists());
    }

    #[test]
    fn test_sinks_for_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.output.silver.database_path = dir.path().join("silver.db");
        config.output.gold.database_path = dir.path().join("gold.db");

        let names: Vec<String> = sinks_for(&config)
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["silver", "gold"]);

        config.output.csv_path = Some(dir.path().join("calendar_date.csv"));
        assert_eq!(sinks_for(&config).unwrap().len(), 3);
    }
}
