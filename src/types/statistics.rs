//! Run statistics for dimension generation
//!
//! Mirrors the stage statistics pattern: a `StatisticsCollector` trait with
//! shared `TimingInfo`, implemented by `GenerationStats`.

use std::time::{Duration, Instant};

/// Common trait for statistics collectors
pub trait StatisticsCollector {
    /// Reset all counters to zero
    fn reset(&mut self);

    /// Get the processing start time
    fn start_time(&self) -> Instant;

    /// Get the total processing duration
    fn duration(&self) -> Duration;

    /// Calculate the processing rate (items per second)
    fn processing_rate(&self) -> f64;

    /// Finalize statistics collection
    fn finish(&mut self);

    /// Get a summary of the statistics
    fn summary(&self) -> String;
}

/// Common timing information for all statistics
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}

/// Rows written to one persistence tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierWrite {
    pub tier: String,
    pub location: String,
    pub rows_written: usize,
}

/// Dimension generation statistics
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    pub dates_in_range: usize,
    pub rows_derived: usize,
    pub duplicates_removed: usize,
    pub workers: usize,
    pub tier_writes: Vec<TierWrite>,
    pub timing: TimingInfo,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows left after deduplication
    pub fn distinct_rows(&self) -> usize {
        self.rows_derived - self.duplicates_removed
    }

    pub fn record_tier_write(&mut self, tier: &str, location: &str, rows_written: usize) {
        self.tier_writes.push(TierWrite {
            tier: tier.to_string(),
            location: location.to_string(),
            rows_written,
        });
    }
}

impl StatisticsCollector for GenerationStats {
    fn reset(&mut self) {
        self.dates_in_range = 0;
        self.rows_derived = 0;
        self.duplicates_removed = 0;
        self.tier_writes.clear();
        self.timing = TimingInfo::new();
    }

    fn start_time(&self) -> Instant {
        self.timing.start_time
    }

    fn duration(&self) -> Duration {
        self.timing.elapsed()
    }

    fn processing_rate(&self) -> f64 {
        let elapsed = self.timing.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.rows_derived as f64 / elapsed
        } else {
            0.0
        }
    }

    fn finish(&mut self) {
        self.timing.finish();
    }

    fn summary(&self) -> String {
        format!(
            "Calendar: {} dates, {} rows derived, {} duplicates removed, {} tiers written, {:.1} rows/sec",
            self.dates_in_range,
            self.rows_derived,
            self.duplicates_removed,
            self.tier_writes.len(),
            self.processing_rate()
        )
    }
}
