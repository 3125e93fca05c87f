//! PFGraph Core — Point-and-Figure chart data transforms.
//!
//! Reads a chart data file produced by the chart-construction engine and
//! derives the aligned plot series the drawing engine consumes:
//! - per-column OHLC-style records with direction and reversal flags
//! - per-category signal overlay series, one winner per column
//! - a uniform most-recent-N window across every series
//! - signal-to-price-row alignment against an optional streamed price file
//!
//! The pipeline is a one-shot, single-threaded batch transform: both
//! inputs are read fully into memory, every failure aborts the run, and
//! the assembled [`bundle::ChartBundle`] is handed to the renderer and
//! dropped.

pub mod align;
pub mod bundle;
pub mod data;
pub mod domain;
pub mod error;
pub mod render;
pub mod series;

pub use bundle::{build_bundle, ChartBundle, GraphicRequest, TrendLineMode};
pub use error::GraphicError;
pub use series::ohlc::AxisFormat;
