//! Common Test Utilities
//!
//! Shared helpers for building scratch configurations and reading back
//! generated tiers.

#![allow(dead_code)]

use calendar_dimension::config::AppConfig;
use chrono::NaiveDate;
use std::path::Path;

/// Shorthand for a known-valid date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Configuration whose tiers live under `dir`, covering `start..=end`
pub fn scratch_config(dir: &Path, start: &str, end: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.range.start_date = start.to_string();
    config.range.end_date = end.to_string();
    config.output.silver.database_path = dir.join("silver").join("silver.db");
    config.output.gold.database_path = dir.join("gold").join("gold.db");
    config.processing.workers = 2;
    config.processing.batch_size = 7;
    config.processing.progress_interval = 10;
    config
}
