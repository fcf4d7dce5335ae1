/// Error types for the property ledger
use thiserror::Error;

/// Main error type for property operations
#[derive(Error, Debug)]
pub enum PropertyError {
    /// A required editor field was left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No property with the given id
    #[error("Property not found: {0}")]
    NotFound(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A CSV cell could not be converted
    #[error("Invalid {field} {value:?} on line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        line: u64,
    },
}

/// Type alias for Results using PropertyError
pub type Result<T> = std::result::Result<T, PropertyError>;
