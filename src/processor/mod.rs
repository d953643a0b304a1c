pub mod assembler;
pub mod base;
pub mod sink;

pub use assembler::{generate, Dimension, DimensionAssembler};
pub use base::*;
pub use sink::{sinks_for, CsvSink, DimensionSink, TierSink};
