//! Domain types: the chart file schema, signal events, and streamed prices.

pub mod chart;
pub mod prices;
pub mod signal;

pub use chart::{BoxScale, BoxSize, ChartFile, Column, CurrentColumn, Direction};
pub use prices::{PriceTick, StreamedPrices};
pub use signal::{SignalEvent, SignalKind};
