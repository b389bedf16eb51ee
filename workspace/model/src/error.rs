use chrono::NaiveDate;
use thiserror::Error;

/// Violations of the published dataset invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A model name outside the evaluated set
    #[error("Unknown forecast model: {0}")]
    UnknownModel(String),

    /// Wrong number of rows in one of the fixed tables
    #[error("Table '{table}' has {actual} rows, expected {expected}")]
    RowCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The same model appears twice in the error metrics table
    #[error("Duplicate model in error metrics: {0}")]
    DuplicateModel(String),

    /// A metric or consumption value that is NaN, infinite or negative
    #[error("Invalid value for '{field}' in row {row}: {value}")]
    InvalidValue {
        field: &'static str,
        row: usize,
        value: f64,
    },

    /// A demand estimate date that is not the first day of a month
    #[error("Date {0} is not the first day of a month")]
    NotMonthStart(NaiveDate),

    /// Two consecutive demand estimates that are not one calendar month apart
    #[error("Dates {previous} and {current} are not consecutive months")]
    MonthGap {
        previous: NaiveDate,
        current: NaiveDate,
    },
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
