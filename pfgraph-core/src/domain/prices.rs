//! Streamed raw prices — the optional second input next to the chart file.

use chrono::NaiveDateTime;

/// One row of the streamed price file.
#[derive(Debug, Clone)]
pub struct PriceTick {
    pub time: NaiveDateTime,
    pub close: f64,
    /// Position in the price file; signals are overlaid by this row index.
    pub row_nbr: usize,
}

impl PriceTick {
    /// Format this tick's timestamp with a chrono pattern (the same one
    /// used for the chart's axis labels).
    pub fn label(&self, fmt: &str) -> String {
        self.time.format(fmt).to_string()
    }
}

/// The full streamed price series, read into memory before any transform.
#[derive(Debug, Clone, Default)]
pub struct StreamedPrices {
    pub ticks: Vec<PriceTick>,
}

impl StreamedPrices {
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// All timestamps formatted with the given chrono pattern, in row order.
    pub fn labels(&self, fmt: &str) -> Vec<String> {
        self.ticks.iter().map(|t| t.label(fmt)).collect()
    }

    /// All closing prices, in row order.
    pub fn closes(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.close).collect()
    }
}
