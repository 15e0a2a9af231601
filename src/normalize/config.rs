//! Key/value config sheet
//!
//! The config table is read positionally: column 0 is the key, column 1 the
//! value. Sheets written by hand often carry literal `key ` / `value `
//! prefixes in the cells; those are stripped.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

use crate::csv::{RawRow, Table};
use crate::sanitize;
use crate::sheet::{ProjectConfig, local_date_today};

const KEY_PREFIX: &str = "key ";
const VALUE_PREFIX: &str = "value ";
const DEFAULT_PREPARED_BY: &str = "Unknown";

/// Rows to feed into [`normalize_config`] for a parsed config table
///
/// When the header line is itself a `key …` pair (a sheet with no header
/// row), it is returned as the first row so the pair is not lost.
pub fn config_rows(table: &Table) -> Vec<RawRow> {
    let headerless = table
        .headers
        .first()
        .is_some_and(|h| strip_prefix_ignore_case(h, KEY_PREFIX).is_some());

    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    if headerless {
        rows.push(table.header_row());
    }
    rows.extend(table.rows.iter().cloned());
    rows
}

/// Build the project config, defaulting dates to the current month
pub fn normalize_config(rows: &[RawRow]) -> ProjectConfig {
    normalize_config_on(rows, local_date_today())
}

/// Build the project config with `today` deciding the default date range
pub fn normalize_config_on(rows: &[RawRow], today: NaiveDate) -> ProjectConfig {
    let mut entries: HashMap<String, String> = HashMap::new();
    for row in rows {
        if let Some((key, value)) = key_value(row) {
            entries.insert(key, value);
        }
    }

    let (month_start, month_end) = month_bounds(today);
    let date_or = |key: &str, default: Option<NaiveDate>| match entries.get(key) {
        Some(raw) => sanitize::date(raw),
        None => default,
    };

    let prepared_by = entries
        .get("prepared_by")
        .map(|v| sanitize::text(v))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_PREPARED_BY.to_string());

    ProjectConfig {
        name: entries
            .get("sprint_name")
            .map(|v| sanitize::text(v))
            .unwrap_or_default(),
        start_date: date_or("start_date", month_start),
        end_date: date_or("end_date", month_end),
        prepared_by,
    }
}

fn key_value(row: &RawRow) -> Option<(String, String)> {
    let first = row.cell(0).unwrap_or("").trim();
    let second = row.cell(1).unwrap_or("").trim();

    let (key, value) = match strip_prefix_ignore_case(first, KEY_PREFIX) {
        Some(key) => (
            key.trim(),
            strip_prefix_ignore_case(second, VALUE_PREFIX)
                .unwrap_or(second)
                .trim(),
        ),
        None => (first, second),
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// First and last calendar day of the month containing `day`
fn month_bounds(day: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let first = day.with_day(1);
    let last = first
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .and_then(|d| d.pred_opt());
    (first, last)
}
