//! Error types for the NACHA file builder.

use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, NachaError>;

/// Errors that can occur while building a NACHA file.
#[derive(Error, Debug)]
pub enum NachaError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error in the entry list
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required configuration key is absent or blank
    #[error("missing configuration field `{field}`")]
    MissingConfigField { field: &'static str },

    /// An entry amount that is not a decimal number
    #[error("Invalid amount {value:?} in entry {index}")]
    InvalidAmount { index: usize, value: String },

    /// An entry amount too large for the 10-digit amount field
    #[error("Amount of {cents} cents in entry {index} exceeds the 10-digit entry amount field")]
    AmountOutOfRange { index: usize, cents: i64 },

    /// Batch credit total too large for the 12-digit control total field
    #[error("Total credit exceeds the 12-digit control total field at entry {index}")]
    TotalOutOfRange { index: usize },

    /// Unknown file mode on the command line
    #[error("Invalid mode {0:?}, expected `test` or `prod`")]
    InvalidMode(String),

    /// Malformed command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing positional arguments
    #[error(
        "Missing input file argument. Usage: nacha-payroll <config.json> <entries.csv> \
         [--mode test|prod] [--batch N] [--end-date YYYYMMDD] [--output PATH]"
    )]
    MissingArgument,
}
