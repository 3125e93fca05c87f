//! Error taxonomy for the draw-graphic pipeline.
//!
//! Everything is fail-fast: the first error anywhere in the transform
//! aborts the run. The CLI splits errors into validation failures (one-line
//! message, exit code 2) and processing failures (full diagnostic, exit
//! code 6) via [`GraphicError::is_validation`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphicError {
    #[error("unable to find specified file: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("format '{0}' must be either: 'date' or 'time'")]
    InvalidAxisFormat(String),

    #[error("trend lines '{0}' must be either: 'no' or 'data' or 'angle'")]
    InvalidTrendLineMode(String),

    #[error("malformed chart data in {}: {reason}", path.display())]
    MalformedChart { path: PathBuf, reason: String },

    #[error("signal references column {column} but the chart has {columns} columns")]
    SignalColumnOutOfRange { column: usize, columns: usize },

    #[error("column timestamp {nanos}ns is outside the representable range")]
    ColumnTimeOutOfRange { nanos: i64 },

    #[error("cannot show last {requested} columns: chart only has {available}")]
    WindowTooLarge { requested: usize, available: usize },

    #[error("bad price record at row {row}: {reason}")]
    BadPriceRecord { row: usize, reason: String },

    #[error("price file error: {0}")]
    PriceFile(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphicError {
    /// Validation failures get a one-line message and exit code 2;
    /// everything else is a processing error (exit code 6).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GraphicError::InputNotFound(_)
                | GraphicError::InvalidAxisFormat(_)
                | GraphicError::InvalidTrendLineMode(_)
        )
    }
}
