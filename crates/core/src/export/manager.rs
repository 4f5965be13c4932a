use std::io::Write;

use tracing::info;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::csv_format;

/// One-shot CSV export of a ledger to bytes, a writer, or a file.
///
/// Export is read-only with respect to the ledger: a failure part-way
/// through leaves in-memory state exactly as it was.
pub struct ExportManager;

impl ExportManager {
    /// Write the CSV export into `writer` and hand the writer back.
    pub fn write_csv<W: Write>(ledger: &Ledger, writer: W) -> Result<W, CoreError> {
        Self::ensure_not_empty(ledger)?;
        csv_format::write_csv(ledger, writer)
    }

    /// Render the CSV export into an in-memory string.
    pub fn to_csv_string(ledger: &Ledger) -> Result<String, CoreError> {
        let bytes = Self::write_csv(ledger, Vec::new())?;
        String::from_utf8(bytes).map_err(|e| CoreError::Csv(e.to_string()))
    }

    /// Export to a file on disk, creating or truncating it.
    ///
    /// The file handle is owned by this call and closed on every path out of
    /// it; buffered data is flushed explicitly so write errors are reported.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_csv_to_file(
        ledger: &Ledger,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), CoreError> {
        Self::ensure_not_empty(ledger)?;
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let mut writer = csv_format::write_csv(ledger, std::io::BufWriter::new(file))?;
        writer.flush()?;
        info!(path = %path.display(), entries = ledger.len(), "csv exported");
        Ok(())
    }

    fn ensure_not_empty(ledger: &Ledger) -> Result<(), CoreError> {
        if ledger.is_empty() {
            return Err(CoreError::NothingToExport);
        }
        Ok(())
    }
}
