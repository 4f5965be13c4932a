use serde::Serialize;

use super::entry::Entry;

/// Aggregates over the current ledger contents.
///
/// Always produced by folding over the entry sequence, so it cannot go stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Σ quantity
    pub total_quantity: f64,

    /// Σ cost (Σ price × quantity)
    pub total_cost: f64,

    /// Weighted average price: total_cost / total_quantity, or 0 when the
    /// total quantity is exactly zero
    pub average_price: f64,
}

impl Totals {
    /// Fold a sequence of entries into totals.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let (total_quantity, total_cost) = entries
            .into_iter()
            .fold((0.0, 0.0), |(q, c), e| (q + e.quantity(), c + e.cost()));

        let average_price = if total_quantity != 0.0 {
            total_cost / total_quantity
        } else {
            0.0
        };

        Self {
            total_quantity,
            total_cost,
            average_price,
        }
    }
}
