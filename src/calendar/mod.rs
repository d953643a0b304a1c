//! Calendar date derivation.
//!
//! - `range`: the bounded, validated date sequence (DateSequenceSource)
//! - `primitives`: week/month/quarter/year boundary arithmetic
//! - `deriver`: per-date attribute families and the full record derivation

pub mod deriver;
pub mod primitives;
pub mod range;

pub use deriver::{derive, DayContext, MonthAttributes, QuarterAttributes, WeekAttributes, YearAttributes};
pub use range::DateRange;
