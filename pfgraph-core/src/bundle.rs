//! Bundle assembly — the one entry point that runs the whole transform.
//!
//! `build_bundle` loads the chart file, derives the column series,
//! resolves signal overlays, aligns against streamed prices when a price
//! file was supplied, windows everything together, and packages the
//! result for the renderer. All state is carried in the request and the
//! returned bundle; nothing here touches process globals.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::align::{align_signals, AlignedSignal};
use crate::data::prices::load_prices;
use crate::domain::chart::{BoxScale, ChartFile};
use crate::domain::prices::StreamedPrices;
use crate::domain::signal::SignalKind;
use crate::error::GraphicError;
use crate::series::ohlc::{build_column_series, AxisFormat};
use crate::series::overlay::SignalOverlays;
use crate::series::window::keep_recent_columns;

/// Trend-line drawing mode, passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLineMode {
    No,
    Data,
    Angle,
}

impl FromStr for TrendLineMode {
    type Err = GraphicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(TrendLineMode::No),
            "data" => Ok(TrendLineMode::Data),
            "angle" => Ok(TrendLineMode::Angle),
            other => Err(GraphicError::InvalidTrendLineMode(other.into())),
        }
    }
}

impl fmt::Display for TrendLineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLineMode::No => f.write_str("no"),
            TrendLineMode::Data => f.write_str("data"),
            TrendLineMode::Angle => f.write_str("angle"),
        }
    }
}

/// Everything one invocation needs, resolved up front by the caller.
#[derive(Debug, Clone)]
pub struct GraphicRequest {
    pub chart_file: PathBuf,
    pub output_dir: PathBuf,
    pub axis_format: AxisFormat,
    pub trend_lines: TrendLineMode,
    /// Keep only the most recent N columns; 0 keeps all.
    pub number_columns: usize,
    pub prices_file: Option<PathBuf>,
}

/// The streamed price series as handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    /// Timestamps formatted with the axis label format.
    pub labels: Vec<String>,
    pub close: Vec<f64>,
}

/// The fixed set of named series and metadata the renderer consumes.
///
/// Uncontested signal positions are `NaN`, which serializes as `null` —
/// the missing-value marker on the wire.
#[derive(Debug, Serialize)]
pub struct ChartBundle {
    pub title: String,
    pub graphic_file: PathBuf,
    pub date_time_format: String,
    pub trend_lines: TrendLineMode,
    pub y_min: f64,
    pub y_max: f64,
    pub opening_price: f64,
    pub reversal_boxes: u32,

    #[serde(rename = "Date")]
    pub labels: Vec<String>,
    #[serde(rename = "Open")]
    pub open: Vec<f64>,
    #[serde(rename = "High")]
    pub high: Vec<f64>,
    #[serde(rename = "Low")]
    pub low: Vec<f64>,
    #[serde(rename = "Close")]
    pub close: Vec<f64>,
    pub direction_is_up: Vec<bool>,
    pub had_step_back: Vec<bool>,

    /// One entry per signal category; absent categories are empty.
    pub signals: BTreeMap<&'static str, Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamed_prices: Option<PriceSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aligned_signals: Option<Vec<AlignedSignal>>,
}

/// Run the full transform for one request.
pub fn build_bundle(request: &GraphicRequest) -> Result<ChartBundle, GraphicError> {
    let chart = ChartFile::load(&request.chart_file)?;
    log::info!(
        "loaded chart for {}: {} completed columns, {} signals",
        chart.symbol,
        chart.columns.len(),
        chart.signals.len()
    );

    let mut series = build_column_series(&chart, request.axis_format)?;
    let mut overlays = SignalOverlays::resolve(&chart.signals, series.len())?;

    // alignment works on the untrimmed label sequence, so it runs before
    // the window is applied
    let streamed = match &request.prices_file {
        Some(path) => Some(load_prices(path)?),
        None => None,
    };
    let aligned = match &streamed {
        Some(prices) => {
            let aligned =
                align_signals(&chart.signals, &series.labels, prices, request.axis_format)?;
            let unresolved = aligned.iter().filter(|a| a.price_row.is_none()).count();
            if unresolved > 0 {
                log::debug!("{unresolved} of {} signals have no matching price row", aligned.len());
            }
            Some(aligned)
        }
        None => None,
    };

    let skipped = keep_recent_columns(&mut series, &mut overlays, request.number_columns)?;
    if skipped > 0 {
        log::debug!("windowed to last {} columns ({skipped} skipped)", series.len());
    }

    let title = make_title(&chart, skipped, request.number_columns, &series.labels);
    let graphic_file = request.output_dir.join(chart.graphic_file_name());

    let signals = SignalKind::ALL
        .iter()
        .map(|&kind| (kind.series_name(), overlays.series(kind).to_vec()))
        .collect();

    let fmt = request.axis_format.label_format();
    Ok(ChartBundle {
        title,
        graphic_file,
        date_time_format: fmt.to_string(),
        trend_lines: request.trend_lines,
        y_min: chart.y_min,
        y_max: chart.y_max,
        opening_price: chart.opening_price(),
        reversal_boxes: chart.current_column.reversal_boxes,
        labels: series.labels,
        open: series.open,
        high: series.high,
        low: series.low,
        close: series.close,
        direction_is_up: series.direction_is_up,
        had_step_back: series.had_step_back,
        signals,
        streamed_prices: streamed.map(|prices| to_price_series(&prices, fmt)),
        aligned_signals: aligned,
    })
}

fn to_price_series(prices: &StreamedPrices, fmt: &str) -> PriceSeries {
    PriceSeries {
        labels: prices.labels(fmt),
        close: prices.closes(),
    }
}

/// Chart title: box geometry, symbol, overall percent change, window
/// note when columns were skipped, and the last column's label.
fn make_title(chart: &ChartFile, skipped: usize, requested: usize, labels: &[String]) -> String {
    let pct_mark = match chart.boxes.box_scale {
        BoxScale::Percent => "%",
        BoxScale::Linear => "",
    };
    let opening = chart.opening_price();
    let overall_pct_chg = (chart.closing_price() - opening) / opening * 100.0;
    let window_note = if skipped > 0 {
        format!(" (last {requested} cols)")
    } else {
        String::new()
    };
    let last_change = labels.last().map(String::as_str).unwrap_or_default();
    format!(
        "{}{} X {} for {}. Overall % change: {:.0}%{}\nLast change: {}",
        chart.fname_box_size,
        pct_mark,
        chart.current_column.reversal_boxes,
        chart.symbol,
        overall_pct_chg,
        window_note,
        last_change,
    )
}
