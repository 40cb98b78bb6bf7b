//! Single-cell value cleaning.
//!
//! Exported sheets hold human-formatted values: currency glyphs, thousands
//! separators, stray whitespace. Cleaning coerces those to machine numbers
//! where the text is unambiguously numeric and leaves everything else as a
//! trimmed string. Cleaning never fails and is idempotent.

use admix_sheet::CellValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with optional thousands separators, decimal point and leading sign.
/// A `%` or any other trailing unit keeps the value textual.
static NUMERIC_WITH_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[\d,.]+$").expect("numeric pattern"));

/// Coerce a raw cell into a normalized scalar.
///
/// - `Null` becomes an empty string so record values are uniformly present.
/// - Numbers (and booleans) pass through unchanged.
/// - Strings are trimmed; numeric-with-punctuation text, or text carrying a
///   currency glyph, is stripped to digits/`.`/`-` and parsed as an integer
///   (or float when a decimal point survives). Text that still fails to
///   parse falls back to the trimmed string.
#[must_use]
pub fn clean(cell: &CellValue) -> CellValue {
    let s = match cell {
        CellValue::Null => return CellValue::String(String::new()),
        CellValue::String(s) => s,
        other => return other.clone(),
    };

    let trimmed = s.trim();
    if NUMERIC_WITH_PUNCTUATION.is_match(trimmed)
        || trimmed.contains('₩')
        || trimmed.contains('$')
    {
        let stripped: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        let parsed = if stripped.contains('.') {
            stripped.parse::<f64>().ok().map(CellValue::Float)
        } else {
            stripped.parse::<i64>().ok().map(CellValue::Int)
        };

        if let Some(value) = parsed {
            return value;
        }
    }

    CellValue::String(trimmed.to_string())
}
