//! Table normalizers
//!
//! Each normalizer turns the raw rows of one logical table into typed
//! records. They share no state, never fail on bad cell data and depend only
//! on the row contents and row index, so normalizing the same rows twice
//! gives identical output.
//!
//! Spreadsheet headers vary in casing and naming between sheets. Each field
//! declares an ordered list of accepted header names which [`field`] resolves.

mod config;
mod members;
mod milestones;
mod tasks;

pub use config::{config_rows, normalize_config, normalize_config_on};
pub use members::normalize_members;
pub use milestones::normalize_milestones;
pub use tasks::normalize_tasks;

use crate::csv::RawRow;

/// Value of the first alias whose cell is non-blank, or `""`
pub fn field<'a>(row: &'a RawRow, aliases: &[&str]) -> &'a str {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|value| !value.trim().is_empty())
        .unwrap_or("")
}
