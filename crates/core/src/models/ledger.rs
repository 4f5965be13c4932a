use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::CoreError;

use super::entry::Entry;
use super::totals::Totals;

/// Ordered collection of entries.
///
/// Insertion order is display order; an entry's 1-based position in that
/// order is its display index. Totals are derived on every query, so every
/// mutation is atomic from the caller's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry. Rejects non-finite numbers (including a cost that
    /// overflows) and a zero quantity without touching the ledger.
    pub fn add(&mut self, price: f64, quantity: f64) -> Result<Entry, CoreError> {
        for value in [price, quantity] {
            if !value.is_finite() {
                return Err(CoreError::invalid_number(&value.to_string(), "not a finite number"));
            }
        }
        if quantity == 0.0 {
            return Err(CoreError::ZeroQuantity);
        }
        if !(price * quantity).is_finite() {
            return Err(CoreError::invalid_number(
                &format!("{price} x {quantity}"),
                "cost is not a finite number",
            ));
        }
        let entry = Entry::new(price, quantity);
        self.entries.push(entry);
        debug!(price, quantity, cost = entry.cost(), count = self.entries.len(), "entry added");
        Ok(entry)
    }

    /// Remove and return the most recently added entry.
    /// Returns `None` on an empty ledger.
    pub fn undo(&mut self) -> Option<Entry> {
        let entry = self.entries.pop();
        if let Some(e) = &entry {
            debug!(price = e.price(), quantity = e.quantity(), count = self.entries.len(), "entry undone");
        }
        entry
    }

    /// Remove every entry whose current 1-based display index is in `indices`.
    ///
    /// Indices outside `1..=len()` are ignored and duplicates count once.
    /// Survivors keep their relative order and are renumbered from 1.
    /// Returns the removed entries in their former order.
    pub fn delete(&mut self, indices: impl IntoIterator<Item = usize>) -> Vec<Entry> {
        let len = self.entries.len();
        let doomed: BTreeSet<usize> = indices
            .into_iter()
            .filter(|i| (1..=len).contains(i))
            .collect();

        if doomed.is_empty() {
            return Vec::new();
        }

        let mut removed = Vec::with_capacity(doomed.len());
        let mut kept = Vec::with_capacity(len - doomed.len());
        for (idx, entry) in (1..).zip(self.entries.drain(..)) {
            if doomed.contains(&idx) {
                removed.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;

        debug!(removed = removed.len(), count = self.entries.len(), "entries deleted");
        removed
    }

    /// Remove all entries.
    pub fn reset(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        debug!(cleared, "ledger reset");
    }

    /// Current aggregates.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::from_entries(&self.entries)
    }

    /// Read-only view of the entries in display order.
    #[must_use]
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries paired with their 1-based display index.
    pub fn iter_numbered(&self) -> impl Iterator<Item = (usize, &Entry)> {
        (1..).zip(self.entries.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
