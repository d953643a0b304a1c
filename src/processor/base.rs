use crate::errors::{AppError, AppResult};
use tracing::{info, warn};

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_write_config(batch_size: usize, progress_interval: usize) -> AppResult<()> {
        if batch_size == 0 {
            return Err(AppError::Config(
                "Batch size must be greater than 0".to_string(),
            ));
        }
        if progress_interval == 0 {
            return Err(AppError::Config(
                "Progress interval must be greater than 0".to_string(),
            ));
        }
        if batch_size > 100_000 {
            warn!(
                "Large batch size: {} - each batch is held in one prepared-statement loop",
                batch_size
            );
        }
        Ok(())
    }

    pub fn validate_workers(workers: usize, dates: usize) -> AppResult<()> {
        if workers == 0 {
            return Err(AppError::Config(
                "Worker count must be greater than 0".to_string(),
            ));
        }
        if workers > dates {
            warn!(
                "More workers ({}) than dates ({}) - extra workers stay idle",
                workers, dates
            );
        }
        Ok(())
    }

    pub fn log_config_summary(
        processor_name: &str,
        batch_size: usize,
        workers: usize,
        additional_info: Option<&str>,
    ) {
        info!("=== {} Configuration ===", processor_name);
        info!("  Batch size: {}", batch_size);
        info!("  Workers: {}", workers);
        if let Some(info) = additional_info {
            info!("  {}", info);
        }
    }
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Format elapsed seconds into human-readable time (hours, minutes, seconds)
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            format!("{:.1}s", elapsed_secs)
        } else if elapsed_secs < 3600.0 {
            let minutes = (elapsed_secs / 60.0).floor();
            let seconds = elapsed_secs % 60.0;
            format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
        } else {
            let hours = (elapsed_secs / 3600.0).floor();
            let remaining = elapsed_secs % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!(
                "{}h {}m {:.0}s ({:.1}s)",
                hours, minutes, seconds, elapsed_secs
            )
        }
    }

    pub fn report_completion(operation: &str, dates: usize, rows: usize, elapsed: f64) {
        let rate = if elapsed > 0.0 {
            rows as f64 / elapsed
        } else {
            0.0
        };
        info!("=== {} Completed ===", operation);
        info!("  Dates in range: {}", dates);
        info!("  Distinct rows: {}", rows);
        info!("  Time elapsed: {:.2}s", elapsed);
        info!("  Average rate: {:.1} rows/sec", rate);
    }
}
