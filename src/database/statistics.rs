//! Dimension table statistics for reporting.

use chrono::NaiveDate;

/// Summary of a persisted dimension table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionStats {
    pub total_rows: usize,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl DimensionStats {
    /// Whether the stored rows cover every day between min and max
    pub fn is_contiguous(&self) -> bool {
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) => (max - min).num_days() + 1 == self.total_rows as i64,
            _ => self.total_rows == 0,
        }
    }
}
