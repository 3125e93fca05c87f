//! Column series — each chart column rendered as an OHLC-style record.
//!
//! Completed columns come first, the current column is always appended
//! last, and nothing is skipped or reordered: the resulting length
//! (`completed + 1`) is the reference length every other series aligns to.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::chart::{ChartFile, Column};
use crate::error::GraphicError;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Granularity of the axis labels: calendar dates or clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFormat {
    Date,
    Time,
}

impl AxisFormat {
    /// The chrono pattern used for axis labels and price-row matching.
    pub fn label_format(self) -> &'static str {
        match self {
            AxisFormat::Date => "%Y-%m-%d",
            AxisFormat::Time => "%H:%M:%S",
        }
    }
}

impl FromStr for AxisFormat {
    type Err = GraphicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(AxisFormat::Date),
            "time" => Ok(AxisFormat::Time),
            other => Err(GraphicError::InvalidAxisFormat(other.into())),
        }
    }
}

impl fmt::Display for AxisFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisFormat::Date => f.write_str("date"),
            AxisFormat::Time => f.write_str("time"),
        }
    }
}

/// Parallel per-column series. All vectors are the same length.
#[derive(Debug, Clone, Default)]
pub struct ColumnSeries {
    pub labels: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub direction_is_up: Vec<bool>,
    pub had_step_back: Vec<bool>,
}

impl ColumnSeries {
    /// Number of columns, the reference length for all derived series.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn push(&mut self, col: &Column, format: AxisFormat) -> Result<(), GraphicError> {
        self.labels.push(column_label(col.first_entry, format)?);
        self.open.push(col.open());
        self.high.push(col.top);
        self.low.push(col.bottom);
        self.close.push(col.close());
        self.direction_is_up
            .push(matches!(col.direction, crate::domain::chart::Direction::Up));
        self.had_step_back.push(col.had_reversal);
        Ok(())
    }

    pub(crate) fn trim_front(&mut self, skip: usize) {
        self.labels.drain(..skip);
        self.open.drain(..skip);
        self.high.drain(..skip);
        self.low.drain(..skip);
        self.close.drain(..skip);
        self.direction_is_up.drain(..skip);
        self.had_step_back.drain(..skip);
    }
}

/// Build the per-column series: all completed columns in chart order,
/// then the current column.
pub fn build_column_series(
    chart: &ChartFile,
    format: AxisFormat,
) -> Result<ColumnSeries, GraphicError> {
    let mut series = ColumnSeries::default();
    for col in &chart.columns {
        series.push(col, format)?;
    }
    series.push(&chart.current_column.column, format)?;
    Ok(series)
}

/// Format a column's first-entry time (nanoseconds since epoch) as an
/// axis label.
fn column_label(nanos: i64, format: AxisFormat) -> Result<String, GraphicError> {
    let secs = nanos.div_euclid(NANOS_PER_SEC);
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    let ts: DateTime<Utc> = DateTime::from_timestamp(secs, subsec)
        .ok_or(GraphicError::ColumnTimeOutOfRange { nanos })?;
    Ok(ts.format(format.label_format()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Direction;

    // 2024-01-02 09:30:00 UTC
    const BASE_NS: i64 = 1_704_187_800_000_000_000;

    fn chart_with(columns: Vec<Column>, current: Column) -> ChartFile {
        let json = r#"{
            "symbol": "TEST", "fname_box_size": "1",
            "boxes": {"box_scale": "linear"},
            "y_min": 0.0, "y_max": 100.0,
            "columns": [],
            "current_column": {"top": 1.0, "bottom": 0.0, "direction": "up",
                               "first_entry": 0, "had_reversal": false,
                               "reversal_boxes": 2},
            "signals": []
        }"#;
        let mut chart: ChartFile = serde_json::from_str(json).unwrap();
        chart.columns = columns;
        chart.current_column.column = current;
        chart
    }

    fn col(direction: Direction, bottom: f64, top: f64, day: i64) -> Column {
        Column {
            top,
            bottom,
            direction,
            first_entry: BASE_NS + day * 86_400 * 1_000_000_000,
            had_reversal: false,
        }
    }

    #[test]
    fn series_length_is_completed_plus_one() {
        let chart = chart_with(
            vec![col(Direction::Up, 10.0, 12.0, 0), col(Direction::Down, 9.0, 11.0, 1)],
            col(Direction::Up, 10.0, 13.0, 2),
        );
        let series = build_column_series(&chart, AxisFormat::Date).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.labels.len(), 3);
        assert_eq!(series.had_step_back.len(), 3);
    }

    #[test]
    fn open_close_permute_top_bottom_by_direction() {
        let chart = chart_with(
            vec![
                col(Direction::Up, 10.0, 12.0, 0),
                col(Direction::Up, 11.0, 15.0, 1),
                col(Direction::Up, 9.0, 13.0, 2),
            ],
            col(Direction::Down, 10.0, 13.0, 3),
        );
        let series = build_column_series(&chart, AxisFormat::Date).unwrap();

        assert_eq!(series.open, vec![10.0, 11.0, 9.0, 13.0]);
        assert_eq!(series.close, vec![12.0, 15.0, 13.0, 10.0]);
        assert_eq!(series.high, vec![12.0, 15.0, 13.0, 13.0]);
        assert_eq!(series.low, vec![10.0, 11.0, 9.0, 10.0]);
        assert_eq!(series.direction_is_up, vec![true, true, true, false]);
    }

    #[test]
    fn date_and_time_label_granularity() {
        let chart = chart_with(vec![], col(Direction::Up, 10.0, 12.0, 0));
        let dated = build_column_series(&chart, AxisFormat::Date).unwrap();
        assert_eq!(dated.labels, vec!["2024-01-02"]);

        let timed = build_column_series(&chart, AxisFormat::Time).unwrap();
        assert_eq!(timed.labels, vec!["09:30:00"]);
    }

    #[test]
    fn step_back_flag_is_copied_verbatim() {
        let mut reversal = col(Direction::Down, 9.0, 11.0, 1);
        reversal.had_reversal = true;
        let chart = chart_with(
            vec![col(Direction::Up, 10.0, 12.0, 0), reversal],
            col(Direction::Up, 10.0, 13.0, 2),
        );
        let series = build_column_series(&chart, AxisFormat::Date).unwrap();
        assert_eq!(series.had_step_back, vec![false, true, false]);
    }

    #[test]
    fn axis_format_parses_and_rejects() {
        assert_eq!("date".parse::<AxisFormat>().unwrap(), AxisFormat::Date);
        assert_eq!("time".parse::<AxisFormat>().unwrap(), AxisFormat::Time);
        assert!(matches!(
            "week".parse::<AxisFormat>(),
            Err(GraphicError::InvalidAxisFormat(_))
        ));
    }

    #[test]
    fn extreme_timestamps_still_format() {
        let mut far = col(Direction::Up, 10.0, 12.0, 0);
        far.first_entry = i64::MAX;
        let chart = chart_with(vec![], far);
        let series = build_column_series(&chart, AxisFormat::Date).unwrap();
        assert_eq!(series.labels.len(), 1);

        let mut early = col(Direction::Up, 10.0, 12.0, 0);
        early.first_entry = -1;
        let chart = chart_with(vec![], early);
        let series = build_column_series(&chart, AxisFormat::Time).unwrap();
        assert_eq!(series.labels, vec!["23:59:59"]);
    }
}
