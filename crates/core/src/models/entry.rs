use serde::Serialize;

/// One recorded position: a price, a quantity, and their product.
///
/// **Immutable**: entries are only created by [`Ledger::add`](super::ledger::Ledger::add)
/// and never change afterwards. `cost` is computed once at creation and
/// stored, not recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entry {
    price: f64,
    quantity: f64,
    cost: f64,
}

impl Entry {
    pub(crate) fn new(price: f64, quantity: f64) -> Self {
        Self {
            price,
            quantity,
            cost: price * quantity,
        }
    }

    /// Unit price (may be zero or negative).
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Quantity, never zero.
    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// `price × quantity`, as computed when the entry was added.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }
}
