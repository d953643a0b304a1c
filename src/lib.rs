//! Calendar Date Dimension Generator
//!

pub mod calendar;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod processor;
pub mod types;
pub mod utils;
