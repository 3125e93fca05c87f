//! Streamed price CSV loading.
//!
//! Only the first two columns are consumed: timestamp and closing price.
//! Row position becomes `row_nbr`, the index signals are aligned to.
//! The whole file is read into memory before any transform runs.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::prices::{PriceTick, StreamedPrices};
use crate::error::GraphicError;

/// Timestamp layouts seen in streamed price files.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Load a streamed price file.
///
/// A leading header row is detected by its timestamp field failing to
/// parse and skipped; any later unparseable row is a fatal
/// [`GraphicError::BadPriceRecord`].
pub fn load_prices(path: &Path) -> Result<StreamedPrices, GraphicError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut ticks: Vec<PriceTick> = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let stamp = record.get(0).unwrap_or_default();
        if row == 0 && parse_timestamp(stamp).is_none() {
            // header row
            continue;
        }

        let time = parse_timestamp(stamp).ok_or_else(|| GraphicError::BadPriceRecord {
            row,
            reason: format!("unrecognized timestamp '{stamp}'"),
        })?;
        let close_field = record.get(1).ok_or_else(|| GraphicError::BadPriceRecord {
            row,
            reason: "missing close price column".into(),
        })?;
        let close: f64 = close_field.parse().map_err(|_| GraphicError::BadPriceRecord {
            row,
            reason: format!("unparseable close price '{close_field}'"),
        })?;

        let row_nbr = ticks.len();
        ticks.push(PriceTick { time, close, row_nbr });
    }

    Ok(StreamedPrices { ticks })
}

fn parse_timestamp(field: &str) -> Option<NaiveDateTime> {
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(field, fmt) {
            return Some(ts);
        }
    }
    // date-only rows are taken as midnight
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_headerless_rows_in_order() {
        let file = write_csv("2024-01-02 09:30:00,100.5\n2024-01-02 09:31:00,100.75\n");
        let prices = load_prices(file.path()).unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices.ticks[0].close, 100.5);
        assert_eq!(prices.ticks[0].row_nbr, 0);
        assert_eq!(prices.ticks[1].row_nbr, 1);
    }

    #[test]
    fn skips_a_header_row() {
        let file = write_csv("date,close\n2024-01-02,100.5\n2024-01-03,101.0\n");
        let prices = load_prices(file.path()).unwrap();

        assert_eq!(prices.len(), 2);
        // row numbering starts after the header
        assert_eq!(prices.ticks[0].row_nbr, 0);
        assert_eq!(prices.ticks[0].label("%Y-%m-%d"), "2024-01-02");
    }

    #[test]
    fn only_first_two_columns_are_consumed() {
        let file = write_csv("2024-01-02,100.5,999,ignored\n");
        let prices = load_prices(file.path()).unwrap();
        assert_eq!(prices.ticks[0].close, 100.5);
    }

    #[test]
    fn bad_timestamp_mid_file_is_fatal() {
        let file = write_csv("2024-01-02,100.5\nnot-a-time,101.0\n");
        let err = load_prices(file.path()).unwrap_err();
        assert!(matches!(err, GraphicError::BadPriceRecord { row: 1, .. }));
    }

    #[test]
    fn bad_close_price_is_fatal() {
        let file = write_csv("2024-01-02,one hundred\n");
        let err = load_prices(file.path()).unwrap_err();
        assert!(err.to_string().contains("one hundred"));
    }

    #[test]
    fn empty_file_loads_as_empty_series() {
        let file = write_csv("");
        let prices = load_prices(file.path()).unwrap();
        assert!(prices.is_empty());
    }
}
