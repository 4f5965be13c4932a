/// How numbers are rendered for people (never for files or state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Fixed number of decimal places.
    pub precision: usize,

    /// Inserted between groups of three integer digits.
    pub thousands_separator: char,

    /// Separates the integer part from the fraction.
    pub decimal_separator: char,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: 6,
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl DisplaySettings {
    /// Default separators with a custom precision.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }
}
