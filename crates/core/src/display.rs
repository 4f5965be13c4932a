//! Human-facing number rendering: `1234.5` → `1.234,500000`.
//!
//! Output is cosmetic only. Files get raw values, and nothing rendered here
//! is ever parsed back into ledger state.

use crate::models::settings::DisplaySettings;

/// Render `value` with the default settings (6 decimals, `.` groups, `,` decimal).
#[must_use]
pub fn format_number(value: f64) -> String {
    format_with(value, &DisplaySettings::default())
}

/// Render `value` with fixed precision and grouped integer digits.
#[must_use]
pub fn format_with(value: f64, settings: &DisplaySettings) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", settings.precision, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_digits(int_part, settings.thousands_separator));
    if let Some(frac) = frac_part {
        out.push(settings.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
