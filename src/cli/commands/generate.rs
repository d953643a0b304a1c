use crate::config::AppConfig;
use crate::database::{Database, DimensionOperations};
use crate::errors::{AppError, AppResult};
use crate::processor::{generate, ProgressReporter};
use crate::types::statistics::StatisticsCollector;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Default)]
#[command(author, version, about, long_about = None)]
pub struct GenerateCommand {
    /// Configuration file (default: ./calendar.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// First date of the range, YYYY-MM-DD (overrides calendar.toml)
    #[arg(long)]
    start_date: Option<String>,

    /// Last date of the range, YYYY-MM-DD (overrides calendar.toml)
    #[arg(long)]
    end_date: Option<String>,

    /// Silver tier database path (overrides calendar.toml)
    #[arg(long)]
    silver_db: Option<PathBuf>,

    /// Silver tier table name (overrides calendar.toml)
    #[arg(long)]
    silver_table: Option<String>,

    /// Gold tier database path (overrides calendar.toml)
    #[arg(long)]
    gold_db: Option<PathBuf>,

    /// Gold tier table name (overrides calendar.toml)
    #[arg(long)]
    gold_table: Option<String>,

    /// Derivation worker threads, 0 for one per CPU (overrides calendar.toml)
    #[arg(long)]
    workers: Option<usize>,

    /// Batch size for database inserts (overrides calendar.toml)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Also export the dimension as CSV to this path
    #[arg(long)]
    csv_path: Option<PathBuf>,
}

impl GenerateCommand {
    /// Loaded configuration with command-line overrides applied
    pub fn resolve_config(&self) -> AppResult<AppConfig> {
        let app_config = match AppConfig::load_from(self.config.as_deref()) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                config
            }
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                info!("You can copy calendar.toml.example as a starting point");
                return Err(AppError::Config(format!("Configuration error: {}", e)));
            }
        };
        Ok(self.apply_overrides(app_config))
    }

    /// CLI arguments override config values
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(start) = &self.start_date {
            config.range.start_date = start.clone();
        }
        if let Some(end) = &self.end_date {
            config.range.end_date = end.clone();
        }
        if let Some(path) = &self.silver_db {
            config.output.silver.database_path = path.clone();
        }
        if let Some(table) = &self.silver_table {
            config.output.silver.table = table.clone();
        }
        if let Some(path) = &self.gold_db {
            config.output.gold.database_path = path.clone();
        }
        if let Some(table) = &self.gold_table {
            config.output.gold.table = table.clone();
        }
        if let Some(workers) = self.workers {
            config.processing.workers = workers;
        }
        if let Some(batch_size) = self.batch_size {
            config.processing.batch_size = batch_size;
        }
        if self.csv_path.is_some() {
            config.output.csv_path = self.csv_path.clone();
        }
        config
    }

    pub fn run(&self) -> AppResult<()> {
        info!("=== Calendar Dimension - Generate ===");

        let config = self.resolve_config()?;
        let stats = generate(&config)?;

        // Print summary
        println!(
            "
=== GENERATION COMPLETE ==="
        );
        println!("Dates in range: {}", stats.dates_in_range);
        println!("Rows derived: {}", stats.rows_derived);
        println!("Duplicates removed: {}", stats.duplicates_removed);
        println!("Distinct rows: {}", stats.distinct_rows());
        println!("Workers: {}", stats.workers);
        println!(
            "Processing time: {}",
            ProgressReporter::format_elapsed_time(stats.duration().as_secs_f64())
        );
        println!("Processing rate: {:.2} rows/sec", stats.processing_rate());
        for write in &stats.tier_writes {
            println!("{} rows written: {} ({})", write.tier, write.rows_written, write.location);
        }

        // Show the gold table as persisted
        let gold = Database::open_path(&config.output.gold.database_path)?;
        let db_stats = gold.get_dimension_stats(&config.output.gold.table)?;
        println!(
            "
=== DATABASE SUMMARY ==="
        );
        println!("Total rows stored: {}", db_stats.total_rows);
        if let (Some(min), Some(max)) = (db_stats.min_date, db_stats.max_date) {
            println!("Date range: {} - {}", min, max);
        }
        println!("Contiguous: {}", if db_stats.is_contiguous() { "yes" } else { "no" });

        println!(
            "
Gold dimension written to: {}",
            config.output.gold.database_path.display()
        );

        Ok(())
    }
}
