//! Windowing — keep the most recent N columns across every series.
//!
//! One trim, applied identically to the column series and every signal
//! overlay, so index alignment survives. Trimming different series by
//! different amounts is a correctness bug, not a style choice.

use crate::error::GraphicError;
use crate::series::ohlc::ColumnSeries;
use crate::series::overlay::SignalOverlays;

/// Trim all series to the most recent `count` columns.
///
/// `count == 0` means no trim. Requesting more columns than exist is an
/// explicit [`GraphicError::WindowTooLarge`], never a silent empty chart.
/// Returns the number of leading columns dropped (for the chart title).
pub fn keep_recent_columns(
    series: &mut ColumnSeries,
    overlays: &mut SignalOverlays,
    count: usize,
) -> Result<usize, GraphicError> {
    if count == 0 {
        return Ok(0);
    }
    let available = series.len();
    if count > available {
        return Err(GraphicError::WindowTooLarge {
            requested: count,
            available,
        });
    }

    let skip = available - count;
    if skip > 0 {
        series.trim_front(skip);
        overlays.trim_front(skip);
    }
    Ok(skip)
}
