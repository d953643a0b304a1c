//! Dimension assembly: derive every date, deduplicate, hand to sinks.
//!
//! Derivation has no data dependency between dates, so the input is split
//! into one contiguous chunk per worker and each worker builds its own
//! `BTreeSet`. The partial sets are merged by union, which is commutative and
//! associative, so the result does not depend on worker scheduling.

use crate::calendar::{derive, DateRange};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::base::{ConfigValidator, ProgressReporter};
use crate::processor::sink::{sinks_for, DimensionSink};
use crate::types::record::CalendarDateRecord;
use crate::types::statistics::{GenerationStats, StatisticsCollector};
use crate::utils::time::is_supported;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Deduplicated dimension rows, ordered by `calendar_date_key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    rows: Vec<CalendarDateRecord>,
    rows_derived: usize,
}

impl Dimension {
    pub fn rows(&self) -> &[CalendarDateRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CalendarDateRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows produced before deduplication (one per input date)
    pub fn rows_derived(&self) -> usize {
        self.rows_derived
    }

    pub fn duplicates_removed(&self) -> usize {
        self.rows_derived - self.rows.len()
    }
}

/// Applies the deriver to a date sequence across worker threads
pub struct DimensionAssembler {
    workers: usize,
}

impl DimensionAssembler {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Derive and deduplicate rows for every date in `dates`.
    ///
    /// All dates are checked against the supported range before any
    /// derivation starts. Distinct rows sharing a key are an error.
    pub fn assemble<I>(&self, dates: I) -> AppResult<Dimension>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let dates: Vec<NaiveDate> = dates.into_iter().collect();
        if let Some(bad) = dates.iter().find(|d| !is_supported(**d)) {
            return Err(AppError::InvalidDate {
                value: bad.to_string(),
                reason: "outside the supported range 1582-10-15..9999-12-31".to_string(),
            });
        }

        let chunk_size = dates.len().div_ceil(self.workers).max(1);
        debug!(
            "Deriving {} dates in chunks of {} across {} workers",
            dates.len(),
            chunk_size,
            self.workers
        );

        let partials = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = dates
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .copied()
                            .map(derive)
                            .collect::<BTreeSet<CalendarDateRecord>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| AppError::Processing("derivation scope panicked".to_string()))?
        .map_err(|_| AppError::Processing("derivation worker panicked".to_string()))?;

        let mut merged = BTreeSet::new();
        for mut partial in partials {
            merged.append(&mut partial);
        }

        let rows: Vec<CalendarDateRecord> = merged.into_iter().collect();
        if let Some(pair) = rows
            .windows(2)
            .find(|pair| pair[0].calendar_date_key == pair[1].calendar_date_key)
        {
            return Err(AppError::InvalidData(format!(
                "Distinct rows share calendar_date_key {}",
                pair[0].calendar_date_key
            )));
        }

        Ok(Dimension {
            rows,
            rows_derived: dates.len(),
        })
    }

    /// Generate-then-write: assemble the whole range, then replace each sink.
    ///
    /// Nothing is written unless assembly succeeds for every date.
    pub fn run(
        &self,
        range: &DateRange,
        sinks: &mut [Box<dyn DimensionSink>],
    ) -> AppResult<GenerationStats> {
        let mut stats = GenerationStats::new();
        stats.dates_in_range = range.len();
        stats.workers = self.workers;

        info!("Assembling calendar dimension for {}", range);
        let dimension = self.assemble(range.dates())?;
        stats.rows_derived = dimension.rows_derived();
        stats.duplicates_removed = dimension.duplicates_removed();
        info!(
            "Derived {} rows ({} duplicates removed)",
            stats.rows_derived, stats.duplicates_removed
        );

        for sink in sinks.iter_mut() {
            let written = sink.write_dimension(dimension.rows())?;
            stats.record_tier_write(sink.name(), &sink.location(), written);
        }

        stats.finish();
        ProgressReporter::report_completion(
            "Calendar Dimension",
            stats.dates_in_range,
            stats.distinct_rows(),
            stats.duration().as_secs_f64(),
        );
        debug!("{}", stats.summary());
        Ok(stats)
    }
}

/// Validate `config`, then generate the dimension and write every sink
///
/// Configuration problems surface before any output file is opened.
pub fn generate(config: &AppConfig) -> AppResult<GenerationStats> {
    config.validate()?;
    let range = config.date_range()?;
    let workers = config.resolved_workers();
    ConfigValidator::validate_workers(workers, range.len())?;
    ConfigValidator::validate_write_config(
        config.processing.batch_size,
        config.processing.progress_interval,
    )?;
    ConfigValidator::log_config_summary(
        "Calendar Dimension",
        config.processing.batch_size,
        workers,
        Some(&format!("Range: {}", range)),
    );

    let mut sinks = sinks_for(config)?;
    DimensionAssembler::new(workers).run(&range, &mut sinks)
}

impl Default for DimensionAssembler {
    fn default() -> Self {
        Self::new(1)
    }
}
