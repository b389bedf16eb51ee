use thiserror::Error;
use tracing::error;

/// Error types for the report module
#[derive(Error, Debug)]
pub enum ReportError {
    /// A published dataset failed its invariant checks
    #[error("Dataset error: {0}")]
    Model(#[from] model::ModelError),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// The page configuration was issued after content had been rendered
    #[error("Page configuration must be set before any other element is rendered")]
    PageConfigAfterContent,

    /// The page configuration was issued more than once
    #[error("Page configuration can only be set once per page")]
    PageConfigRepeated,

    /// The rendering surface could not accept an element
    #[error("Surface error: {0}")]
    Surface(String),
}

impl From<polars::error::PolarsError> for ReportError {
    fn from(error: polars::error::PolarsError) -> Self {
        let err = match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                ReportError::DataFrame(format!("Column not found: {}", error))
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                ReportError::DataFrame(format!("Shape mismatch: {}", error))
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                ReportError::DataFrame(format!("Schema mismatch: {}", error))
            }
            polars::error::PolarsError::OutOfBounds(_) => {
                ReportError::DataFrame(format!("Out of bounds: {}", error))
            }
            _ => ReportError::DataFrame(error.to_string()),
        };
        error!(?err, "DataFrame error");
        err
    }
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
