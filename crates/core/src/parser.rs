//! Locale-tolerant number parsing.
//!
//! Users type prices the way their keyboard and habits dictate: `13,5`,
//! `1.234,56`, `1,234.56`, `4 870`. Everything is normalized to a plain
//! dot-decimal string before handing it to `f64::from_str`, so the result
//! never depends on the host locale.

use crate::errors::CoreError;

/// Parse user-entered text into a finite `f64`.
///
/// Normalization:
/// 1. trim; empty input is rejected
/// 2. drop spaces and underscores (digit-group noise)
/// 3. comma but no dot: commas are decimal separators
/// 4. both present: the rightmost separator is the decimal one, the other is
///    stripped as a thousands separator
/// 5. parse; anything non-numeric or non-finite is rejected
pub fn parse_number(text: &str) -> Result<f64, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_number(text, "empty value"));
    }

    let normalized = normalize(trimmed);

    let value: f64 = normalized
        .parse()
        .map_err(|_| CoreError::invalid_number(trimmed, "not a number"))?;

    if !value.is_finite() {
        return Err(CoreError::invalid_number(trimmed, "not a finite number"));
    }

    Ok(value)
}

/// Rewrite `s` into canonical dot-decimal form. Does not validate.
fn normalize(s: &str) -> String {
    let s: String = s.chars().filter(|c| *c != ' ' && *c != '_').collect();

    match (s.rfind(','), s.rfind('.')) {
        (Some(_), None) => s.replace(',', "."),
        (Some(last_comma), Some(last_dot)) if last_comma > last_dot => {
            s.replace('.', "").replace(',', ".")
        }
        (Some(_), Some(_)) => s.replace(',', ""),
        _ => s,
    }
}
