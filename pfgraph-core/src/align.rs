//! Price alignment — mapping signals onto rows of the streamed price series.
//!
//! A signal's event time is the axis label of its column. The price
//! series' timestamps are formatted with the identical pattern and
//! matched exactly; the earliest matching row wins when labels repeat.
//! A signal with no matching row stays in the list as unresolved — it is
//! excluded from the drawable overlay, never defaulted to row 0.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::prices::StreamedPrices;
use crate::domain::signal::SignalEvent;
use crate::error::GraphicError;
use crate::series::ohlc::AxisFormat;

/// One signal located (or not) on the streamed price series.
#[derive(Debug, Clone, Serialize)]
pub struct AlignedSignal {
    /// Chart column the signal fired in.
    pub column: usize,
    /// Matching row in the price series; `None` means unresolved.
    pub price_row: Option<usize>,
    pub box_value: f64,
    pub signal_price: f64,
}

/// Align every signal event to the streamed price series.
///
/// `column_labels` is the full, untrimmed axis label sequence; an event
/// referencing a column outside it is a fatal indexing error. An empty
/// price series is not an error — every signal comes back unresolved.
pub fn align_signals(
    events: &[SignalEvent],
    column_labels: &[String],
    prices: &StreamedPrices,
    format: AxisFormat,
) -> Result<Vec<AlignedSignal>, GraphicError> {
    let fmt = format.label_format();

    // label → earliest row with that label
    let mut row_by_label: HashMap<String, usize> = HashMap::with_capacity(prices.len());
    for tick in &prices.ticks {
        row_by_label.entry(tick.label(fmt)).or_insert(tick.row_nbr);
    }

    events
        .iter()
        .map(|event| {
            let label = column_labels.get(event.column).ok_or(
                GraphicError::SignalColumnOutOfRange {
                    column: event.column,
                    columns: column_labels.len(),
                },
            )?;
            Ok(AlignedSignal {
                column: event.column,
                price_row: row_by_label.get(label.as_str()).copied(),
                box_value: event.box_value,
                signal_price: event.signal_price(),
            })
        })
        .collect()
}
