use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Duration must be at least one month, got {0}")]
    InvalidDuration(u32),

    #[error("Duration of {requested} months exceeds the configured maximum of {max}")]
    DurationTooLong { requested: u32, max: u32 },

    #[error("Tax bracket limits out of order: bracket 1 limit {bracket1} must be non-negative and below bracket 2 limit {bracket2}")]
    BracketOrder { bracket1: i64, bracket2: i64 },

    #[error("Rate '{field}' is out of range: {value}")]
    InvalidRate { field: String, value: f64 },

    #[error("Amount '{field}' is outside the supported currency range: {value}")]
    InvalidAmount { field: String, value: i64 },

    #[error("Scenario {scenario_id}: {field} left the supported currency range in month {month}")]
    Overflow { scenario_id: String, field: &'static str, month: u32 },

    #[error("Invalid month for {field}: {message}")]
    InvalidMonth { field: String, message: String },

    #[error("Projection horizon of {months} months from {start} is outside the supported calendar")]
    DateOutOfRange { start: chrono::NaiveDate, months: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
