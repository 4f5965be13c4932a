pub mod display;
pub mod errors;
pub mod export;
pub mod models;
pub mod parser;

use serde::Serialize;
use tracing::debug;

use errors::CoreError;
use export::manager::ExportManager;
use models::{entry::Entry, ledger::Ledger, settings::DisplaySettings, totals::Totals};

pub use display::format_number;
pub use parser::parse_number;

/// Main entry point for the modtrader core library.
///
/// Owns the ledger and display settings. Front ends mutate through these
/// methods and then pull whatever they need to render; nothing is pushed to
/// them.
#[must_use]
pub struct Calculator {
    ledger: Ledger,
    settings: DisplaySettings,
    /// Tracks whether the ledger changed since the last successful export.
    dirty: bool,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("entries", &self.ledger.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly view of the whole calculator state.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    entries: &'a [Entry],
    totals: Totals,
}

impl Calculator {
    /// Empty ledger, default display settings.
    pub fn new() -> Self {
        Self::with_settings(DisplaySettings::default())
    }

    pub fn with_settings(settings: DisplaySettings) -> Self {
        Self {
            ledger: Ledger::new(),
            settings,
            dirty: false,
        }
    }

    // ── Entry Management ────────────────────────────────────────────

    /// Parse both fields as typed by the user, then record the entry.
    ///
    /// On any error the ledger is left untouched so the caller can keep the
    /// user's input for correction.
    pub fn add_entry(&mut self, price_text: &str, quantity_text: &str) -> Result<Entry, CoreError> {
        let price = parse_number(price_text)?;
        let quantity = parse_number(quantity_text)?;
        self.add(price, quantity)
    }

    /// Record an entry from already-parsed numbers.
    pub fn add(&mut self, price: f64, quantity: f64) -> Result<Entry, CoreError> {
        let entry = self.ledger.add(price, quantity)?;
        self.dirty = true;
        Ok(entry)
    }

    /// Remove the most recently added entry, if any.
    pub fn undo(&mut self) -> Option<Entry> {
        let entry = self.ledger.undo();
        if entry.is_some() {
            self.dirty = true;
        }
        entry
    }

    /// Delete entries by 1-based display index. See [`Ledger::delete`].
    pub fn delete(&mut self, indices: impl IntoIterator<Item = usize>) -> Vec<Entry> {
        let removed = self.ledger.delete(indices);
        if !removed.is_empty() {
            self.dirty = true;
        }
        removed
    }

    /// Clear every entry.
    pub fn reset(&mut self) {
        if !self.ledger.is_empty() {
            self.ledger.reset();
            self.dirty = true;
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.ledger.snapshot()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.ledger.len()
    }

    /// `true` if entries were added or removed since the last successful export.
    #[must_use]
    pub fn has_unexported_changes(&self) -> bool {
        self.dirty
    }

    // ── Display ─────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: DisplaySettings) {
        debug!(?settings, "display settings changed");
        self.settings = settings;
    }

    /// Render a number for people using the current display settings.
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        display::format_with(value, &self.settings)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Write the CSV export into `writer`. Clears the unexported-changes flag on success.
    pub fn export_csv_to_writer<W: std::io::Write>(&mut self, writer: W) -> Result<W, CoreError> {
        let writer = ExportManager::write_csv(&self.ledger, writer)?;
        self.dirty = false;
        Ok(writer)
    }

    /// Render the CSV export as a string. Does not count as an export for
    /// the unexported-changes flag.
    pub fn export_csv_to_string(&self) -> Result<String, CoreError> {
        ExportManager::to_csv_string(&self.ledger)
    }

    /// Write the CSV export to a file (native only).
    /// Clears the unexported-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_csv_to_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        ExportManager::save_csv_to_file(&self.ledger, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Entries and totals as pretty JSON, for display or piping into other tools.
    pub fn summary_json(&self) -> Result<String, CoreError> {
        let summary = Summary {
            entries: self.ledger.snapshot(),
            totals: self.ledger.totals(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}
