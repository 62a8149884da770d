//! Errors raised while loading an external sales table.
//!
//! The embedded table never produces these; they exist for
//! [`SeriesTable::from_csv`](crate::series::SeriesTable::from_csv) and
//! [`SeriesTable::from_parts`](crate::series::SeriesTable::from_parts).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid period '{0}', expected YYYY-MM")]
    InvalidPeriod(String),

    #[error("expected {expected} periods, found {found}")]
    PeriodCount { expected: usize, found: usize },

    #[error("periods out of order: '{later}' does not follow '{earlier}'")]
    PeriodOrder { earlier: String, later: String },

    #[error("expected {expected} series rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row '{manufacturer}' has {found} values, expected {expected}")]
    RowLength {
        manufacturer: String,
        expected: usize,
        found: usize,
    },

    #[error("row '{manufacturer}' has invalid unit value '{value}'")]
    InvalidUnits { manufacturer: String, value: String },

    #[error("manufacturer '{0}' appears more than once")]
    DuplicateManufacturer(String),

    #[error("manufacturer '{0}' is missing from the table")]
    MissingManufacturer(String),

    #[error("total market units are zero for {0}")]
    ZeroTotal(String),

    #[error("total market units overflow for {0}")]
    TotalOverflow(String),
}
