//! Field sanitizers
//!
//! Every function here is total: malformed cell text is replaced by a
//! documented default instead of producing an error.

use chrono::{DateTime, NaiveDate};

use crate::sheet::ColorClass;

/// Maximum length (in characters) of free-text fields
pub const MAX_TEXT_CHARS: usize = 500;

/// Maximum length (in characters) of identifiers
pub const MAX_ID_CHARS: usize = 50;

/// Date layouts accepted from spreadsheet cells, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%b %d, %Y", "%B %d, %Y", "%d %b %Y",
    "%d %B %Y",
];

/// A closed set of canonical string values with spreadsheet aliases
///
/// Used by [`enum_with_aliases`]. Alias keys are written in canonical form
/// (lowercase, whitespace collapsed to `-`).
pub trait CanonicalEnum: Copy + 'static {
    /// Canonical spelling of every variant
    const VARIANTS: &'static [(&'static str, Self)];
    /// Alternative spellings, consulted before the canonical names
    const ALIASES: &'static [(&'static str, Self)];
    /// Value used when nothing matches
    const DEFAULT: Self;
}

/// Trim and truncate free text to [`MAX_TEXT_CHARS`]
pub fn text(raw: &str) -> String {
    raw.trim().chars().take(MAX_TEXT_CHARS).collect()
}

/// Reduce a cell to a slug: lowercase, `[a-z0-9_-]` only, at most [`MAX_ID_CHARS`]
///
/// ```
/// # use sprint_sheet::sanitize::identifier;
/// assert_eq!(identifier("  My ID!! "), "myid");
/// ```
pub fn identifier(raw: &str) -> String {
    raw.to_lowercase()
        .trim()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .take(MAX_ID_CHARS)
        .collect()
}

/// Lowercase, trim and collapse inner whitespace runs to single hyphens
pub fn canonical_key(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a colour class, falling back to a palette slot derived from `id`
///
/// The fallback is the sum of the id's character codes modulo the palette
/// size, so a member keeps the same colour across reloads.
pub fn color_class(raw: &str, id: &str) -> ColorClass {
    let key = raw.trim().to_lowercase();
    ColorClass::VARIANTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| {
            let palette = ColorClass::VARIANTS;
            let sum: u64 = id.chars().map(|c| u64::from(u32::from(c))).sum();
            palette[(sum % palette.len() as u64) as usize].1
        })
}

/// Parse a floating point number, returning `default` for empty or invalid cells
pub fn numeric(raw: &str, default: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Like [`numeric`], but zero and negative values also fall back to `default`
pub fn positive_numeric(raw: &str, default: f64) -> f64 {
    let value = numeric(raw, default);
    if value > 0.0 { value } else { default }
}

/// Parse a calendar date in any of the accepted layouts
///
/// Returns `None` for empty or unparseable cells. ISO datetimes keep only
/// their date part.
pub fn date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    // "2025-03-10T09:00" or "2025-03-10 09:00:00"
    match (trimmed.get(..10), trimmed.get(10..11)) {
        (Some(head), Some("T" | " ")) => NaiveDate::parse_from_str(head, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Format an optional date as `YYYY-MM-DD`, or the empty string
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Accept only `http://`, `https://` or `#` links
pub fn url(raw: &str) -> String {
    let value = text(raw);
    let lower = value.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with('#') {
        value
    } else {
        String::new()
    }
}

/// True only for the literal `true`, in any case
pub fn boolean(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Map a cell onto `T`, trying aliases first and `T::DEFAULT` last
pub fn enum_with_aliases<T: CanonicalEnum>(raw: &str) -> T {
    let key = canonical_key(raw);
    T::ALIASES
        .iter()
        .chain(T::VARIANTS.iter())
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
        .unwrap_or(T::DEFAULT)
}
