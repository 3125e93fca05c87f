//! Column-index-aligned plot series derived from the chart file.
//!
//! Everything here shares one index space: position `i` in any series
//! refers to the same chart column as position `i` in every other.
//! The windower is the only operation allowed to change lengths, and it
//! applies one trim to all of them together.

pub mod ohlc;
pub mod overlay;
pub mod window;

pub use ohlc::{build_column_series, AxisFormat, ColumnSeries};
pub use overlay::SignalOverlays;
pub use window::keep_recent_columns;
