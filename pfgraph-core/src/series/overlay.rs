//! Signal overlays — one winning signal per column, projected onto
//! per-category series.
//!
//! Events are grouped by the column they reference, wherever they sit in
//! the input order. Within a column the highest priority wins; on a tie
//! the earliest event in input order is kept. A category's series exists
//! only if the category won at least one column — losing every contest
//! leaves it with an empty series so the renderer skips the layer.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::domain::signal::{SignalEvent, SignalKind};
use crate::error::GraphicError;

/// Per-category signal series, aligned to the column series.
///
/// Uncontested positions hold `f64::NAN`; the marker is distinct from any
/// legitimate price and serializes as `null`.
#[derive(Debug, Clone)]
pub struct SignalOverlays {
    len: usize,
    series: BTreeMap<SignalKind, Vec<f64>>,
}

impl SignalOverlays {
    /// Resolve the chart's signal events against a column series of
    /// length `len`.
    ///
    /// Fails before writing anything if any event references a column
    /// outside `[0, len)`.
    pub fn resolve(events: &[SignalEvent], len: usize) -> Result<SignalOverlays, GraphicError> {
        if let Some(bad) = events.iter().find(|e| e.column >= len) {
            return Err(GraphicError::SignalColumnOutOfRange {
                column: bad.column,
                columns: len,
            });
        }

        // One winner per column. Replacement only on strictly higher
        // priority, so equal maxima keep the earliest event.
        let mut winners: BTreeMap<usize, &SignalEvent> = BTreeMap::new();
        for event in events {
            match winners.entry(event.column) {
                Entry::Vacant(slot) => {
                    slot.insert(event);
                }
                Entry::Occupied(mut slot) => {
                    if event.priority > slot.get().priority {
                        slot.insert(event);
                    }
                }
            }
        }

        let mut series: BTreeMap<SignalKind, Vec<f64>> = BTreeMap::new();
        for (&column, winner) in &winners {
            series
                .entry(winner.kind)
                .or_insert_with(|| vec![f64::NAN; len])[column] = winner.box_value;
        }

        Ok(SignalOverlays { len, series })
    }

    /// The series for one category: full-length if the category won at
    /// least one column, empty otherwise.
    pub fn series(&self, kind: SignalKind) -> &[f64] {
        self.series.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that won at least one column.
    pub fn winning_kinds(&self) -> impl Iterator<Item = SignalKind> + '_ {
        self.series.keys().copied()
    }

    /// Reference length the non-empty series are aligned to.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no category won any column.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub(crate) fn trim_front(&mut self, skip: usize) {
        for values in self.series.values_mut() {
            values.drain(..skip);
        }
        self.len -= skip;
    }
}
