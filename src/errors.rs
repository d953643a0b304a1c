use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues (fatal, raised before any output is produced)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Date string that cannot be used as a range bound
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Data validation
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Worker thread failures during derivation
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
