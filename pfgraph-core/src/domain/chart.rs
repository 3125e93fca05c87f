//! Chart file schema — the representation handed over by the chart engine.
//!
//! The chart-construction engine owns box geometry and signal detection;
//! this crate only reads its output. Every struct here is deserialized
//! once per run and never mutated.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::domain::signal::SignalEvent;
use crate::error::GraphicError;

/// Direction of a column's price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// How box sizes scale: a fixed price increment or a percentage step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxScale {
    Percent,
    Linear,
}

/// Box size as written by the chart engine for use in file names.
///
/// Older chart files carry a pre-formatted string, newer ones a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoxSize {
    Text(String),
    Number(f64),
}

impl fmt::Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxSize::Text(s) => f.write_str(s),
            BoxSize::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One completed column: a vertical run of boxes in a single direction.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub top: f64,
    pub bottom: f64,
    pub direction: Direction,
    /// Timestamp of the first entry in this column, nanoseconds since epoch.
    pub first_entry: i64,
    pub had_reversal: bool,
}

impl Column {
    /// Open by direction: an up column opens at its bottom, a down column
    /// at its top.
    pub fn open(&self) -> f64 {
        match self.direction {
            Direction::Up => self.bottom,
            Direction::Down => self.top,
        }
    }

    /// Close by direction: the opposite boundary from [`Column::open`].
    pub fn close(&self) -> f64 {
        match self.direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        }
    }
}

/// The still-open most recent column. Always drawn after all completed
/// columns and never trimmed independently of them.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentColumn {
    #[serde(flatten)]
    pub column: Column,
    /// Number of boxes required to reverse direction.
    pub reversal_boxes: u32,
}

/// Box scaling parameters from the chart engine.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxSpec {
    pub box_scale: BoxScale,
}

/// A complete chart data file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartFile {
    pub symbol: String,
    pub fname_box_size: BoxSize,
    pub boxes: BoxSpec,
    pub y_min: f64,
    pub y_max: f64,
    pub columns: Vec<Column>,
    pub current_column: CurrentColumn,
    pub signals: Vec<SignalEvent>,
}

impl ChartFile {
    /// Read and deserialize a chart file.
    ///
    /// A missing file is a validation failure; anything unparseable (bad
    /// JSON, unknown direction or signal tag, missing fields) is a
    /// malformed-chart processing error.
    pub fn load(path: &Path) -> Result<ChartFile, GraphicError> {
        if !path.exists() {
            return Err(GraphicError::InputNotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|err| GraphicError::MalformedChart {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Price the chart opened at: the open of the first completed column,
    /// or of the current column when no column has completed yet.
    pub fn opening_price(&self) -> f64 {
        self.columns
            .first()
            .unwrap_or(&self.current_column.column)
            .open()
    }

    /// Price the chart currently closes at: the close of the current column.
    pub fn closing_price(&self) -> f64 {
        self.current_column.column.close()
    }

    /// Name for the output graphic, e.g. `AAPL_2%X3_percent.svg`.
    pub fn graphic_file_name(&self) -> String {
        let (pct_mark, scale_name) = match self.boxes.box_scale {
            BoxScale::Percent => ("%", "percent"),
            BoxScale::Linear => ("", "linear"),
        };
        format!(
            "{}_{}{}X{}_{}.svg",
            self.symbol, self.fname_box_size, pct_mark, self.current_column.reversal_boxes, scale_name
        )
    }
}
