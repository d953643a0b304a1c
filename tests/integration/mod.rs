//! Integration Tests Module
//!
//! End-to-end tests of the generate pipeline: configuration, derivation and
//! persistence to every sink.

pub mod csv_export;
pub mod generate_pipeline;
