pub mod entry;
pub mod ledger;
pub mod settings;
pub mod totals;
