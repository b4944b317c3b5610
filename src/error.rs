use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Dataset loading
// ---------------------------------------------------------------------------

/// Failure to turn the auction CSV into a [`Dataset`](crate::data::model::Dataset).
///
/// Every variant is fatal: the dashboard refuses to start without data.
/// Row numbers count data rows from 1 (the header is not a row).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a sale date (expected MM/DD/YYYY HH:MM)")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: '{value}' is not a sale price")]
    InvalidPrice { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// An aggregation name other than Daily, Monthly or Yearly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregation period '{0}' (expected Daily, Monthly or Yearly)")]
pub struct InvalidAggregationError(pub String);
