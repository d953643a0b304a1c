//! Calendar Dimension Generator - Type System
//!
//! - `record`: the flat dimension row and its column catalogue
//! - `statistics`: run statistics with the common collector trait

pub mod record;
pub mod statistics;

pub use record::{CalendarDateRecord, COLUMNS};
pub use statistics::{GenerationStats, StatisticsCollector, TierWrite};
