use thiserror::Error;

/// Unified error type for the entire modtrader-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error("Quantity must not be zero")]
    ZeroQuantity,

    // ── Export ──────────────────────────────────────────────────────
    #[error("No entries to export")]
    NothingToExport,

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    pub(crate) fn invalid_number(input: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidNumber {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// `true` for errors caused by what the user typed; the caller should
    /// keep the input around and ask again.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, CoreError::InvalidNumber { .. } | CoreError::ZeroQuantity)
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // Unwrap I/O failures so callers see one variant for "the disk said no".
        if e.is_io_error() {
            if let csv::ErrorKind::Io(io) = e.into_kind() {
                return CoreError::FileIO(io.to_string());
            }
            return CoreError::FileIO("unknown I/O failure".into());
        }
        CoreError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
