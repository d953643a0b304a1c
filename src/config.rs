use crate::calendar::range::{DateRange, DEFAULT_END_DATE, DEFAULT_START_DATE};
use crate::errors::{AppError, AppResult};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from calendar.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub range: RangeConfig,
    pub output: OutputConfig,
    pub processing: ProcessingConfig,
}

/// Inclusive date range as ISO-8601 strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start_date: String,
    pub end_date: String,
}

/// Where the dimension is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub silver: TierConfig,
    pub gold: TierConfig,
    /// Optional CSV export of the same rows
    pub csv_path: Option<PathBuf>,
}

/// One named output location: a SQLite database file and a table in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    pub database_path: PathBuf,
    pub table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Derivation worker threads (0 = one per available CPU)
    pub workers: usize,
    /// Rows per insert batch
    pub batch_size: usize,
    /// Rows between progress log lines while writing
    pub progress_interval: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            range: RangeConfig {
                start_date: DEFAULT_START_DATE.to_string(),
                end_date: DEFAULT_END_DATE.to_string(),
            },
            output: OutputConfig {
                silver: TierConfig {
                    database_path: PathBuf::from("./output/silver.db"),
                    table: "calendar_date".to_string(),
                },
                gold: TierConfig {
                    database_path: PathBuf::from("./output/gold.db"),
                    table: "dim_calendar_date".to_string(),
                },
                csv_path: None,
            },
            processing: ProcessingConfig {
                workers: 0,
                batch_size: 10_000,
                progress_interval: 100_000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from calendar.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default calendar.toml
    ///
    /// Environment variables use the `CALENDAR_` prefix and `__` between
    /// sections, e.g. `CALENDAR_RANGE__START_DATE=2000-01-01`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("range.start_date", defaults.range.start_date)?
            .set_default("range.end_date", defaults.range.end_date)?
            .set_default(
                "output.silver.database_path",
                defaults.output.silver.database_path.to_string_lossy().to_string(),
            )?
            .set_default("output.silver.table", defaults.output.silver.table)?
            .set_default(
                "output.gold.database_path",
                defaults.output.gold.database_path.to_string_lossy().to_string(),
            )?
            .set_default("output.gold.table", defaults.output.gold.table)?
            .set_default("processing.workers", defaults.processing.workers as i64)?
            .set_default("processing.batch_size", defaults.processing.batch_size as i64)?
            .set_default(
                "processing.progress_interval",
                defaults.processing.progress_interval as i64,
            )?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("calendar").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("CALENDAR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parsed and validated date range
    pub fn date_range(&self) -> AppResult<DateRange> {
        DateRange::parse(&self.range.start_date, &self.range.end_date)
    }

    /// Check everything that would otherwise fail part-way through a run
    pub fn validate(&self) -> AppResult<()> {
        self.date_range()?;

        for tier in [&self.output.silver, &self.output.gold] {
            validate_table_name(&tier.table)?;
        }

        if self.output.silver == self.output.gold {
            return Err(AppError::Config(format!(
                "Silver and gold tiers both point at {}:{}",
                self.output.silver.database_path.display(),
                self.output.silver.table
            )));
        }

        if self.processing.batch_size == 0 {
            return Err(AppError::Config(
                "Batch size must be greater than 0".to_string(),
            ));
        }
        if self.processing.progress_interval == 0 {
            return Err(AppError::Config(
                "Progress interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Worker count with 0 resolved to the available parallelism
    pub fn resolved_workers(&self) -> usize {
        match self.processing.workers {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

/// Table names are interpolated into DDL, so only plain identifiers pass
pub fn validate_table_name(name: &str) -> AppResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::Config(format!("Invalid table name: '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.range.start_date, "1900-01-01");
        assert_eq!(config.range.end_date, "2999-12-31");
        assert_eq!(config.output.silver.table, "calendar_date");
        assert_eq!(config.output.gold.table, "dim_calendar_date");
        assert!(config.output.csv_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_config_with_env_vars() {
        env::set_var("CALENDAR_RANGE__START_DATE", "2024-01-01");
        env::set_var("CALENDAR_PROCESSING__WORKERS", "3");

        let config = AppConfig::load();

        env::remove_var("CALENDAR_RANGE__START_DATE");
        env::remove_var("CALENDAR_PROCESSING__WORKERS");

        let config = config.unwrap();
        assert_eq!(config.range.start_date, "2024-01-01");
        assert_eq!(config.processing.workers, 3);
        assert_eq!(config.resolved_workers(), 3);
    }

    #[test]
    #[serial]
    fn test_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[range]
start_date = "2020-01-01"
end_date = "2020-12-31"

[output.gold]
database_path = "/tmp/gold.db"
table = "dim_date"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.date_range().unwrap().len(), 366);
        assert_eq!(config.output.gold.table, "dim_date");
        assert_eq!(config.output.gold.database_path, PathBuf::from("/tmp/gold.db"));
        // Untouched sections keep their defaults
        assert_eq!(config.output.silver.table, "calendar_date");
    }

    #[test]
    fn test_invalid_range_is_config_error() {
        let mut config = AppConfig::default();
        config.range.start_date = "2024-02-30".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_identical_tiers_rejected() {
        let mut config = AppConfig::default();
        config.output.gold = config.output.silver.clone();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_table_name() {
        assert!(validate_table_name("calendar_date").is_ok());
        assert!(validate_table_name("_dim2").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("2dim").is_err());
        assert!(validate_table_name("dim; DROP TABLE x").is_err());
    }

    #[test]
    fn test_resolved_workers_auto() {
        let config = AppConfig::default();
        assert!(config.resolved_workers() >= 1);
    }
}
