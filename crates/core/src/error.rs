//! Error types for brickfield

use thiserror::Error;

/// Main error type for brickfield operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed color guide. Collects every offending entry so the caller
    /// sees the whole problem at once; no partial mapping is ever produced.
    #[error("invalid color guide: {}", issues.join("; "))]
    Config { issues: Vec<String> },

    /// A literal layer marker that does not name an integer level.
    #[error("layer marker {marker:?} is not an integer level")]
    LayerMarker { marker: String },

    /// A table cell that failed type coercion at the parsing boundary.
    #[error("malformed cell at row {row}, column {col}: {value:?}")]
    Table {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{0}")]
    Other(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `Config` error from a list of issues.
    pub fn config<S: Into<String>>(issues: Vec<S>) -> Self {
        Error::Config {
            issues: issues.into_iter().map(Into::into).collect(),
        }
    }
}
