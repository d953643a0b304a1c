//! Unit Tests Module
//!
//! Property checks of the per-date derivation over whole ranges.

pub mod deriver_properties;
pub mod previous_period_consistency;
