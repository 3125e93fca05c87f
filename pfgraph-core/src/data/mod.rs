//! File ingestion for the optional streamed price input.

pub mod prices;

pub use prices::load_prices;
