//! Error types for loading a sprint sheet.

use std::path::PathBuf;
use thiserror::Error;

use crate::sheet::TableKind;

/// Errors raised by a [`TableSource`](crate::source::TableSource) while retrieving a table.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no location for this table.
    #[error("no export configured for the {table} table")]
    NotConfigured { table: TableKind },

    /// Failed to read the exported file.
    #[error("failed to read {table} export {path}: {source}")]
    Io {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal failures of a load cycle.
///
/// Any of these makes the loader substitute the fallback dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The table text has no header line or is not CSV at all.
    #[error("Invalid {table} data structure")]
    MalformedInput { table: TableKind },

    /// A required table could not be retrieved.
    #[error("required {table} table is unavailable: {source}")]
    MissingTable {
        table: TableKind,
        #[source]
        source: SourceError,
    },

    /// The normalized dataset failed validation.
    #[error("validation failed: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MalformedInput {
            table: TableKind::Members,
        };
        assert_eq!(err.to_string(), "Invalid members data structure");
    }

    #[test]
    fn test_missing_table_keeps_source() {
        let err = LoadError::MissingTable {
            table: TableKind::Tasks,
            source: SourceError::NotConfigured {
                table: TableKind::Tasks,
            },
        };
        assert_eq!(
            err.to_string(),
            "required tasks table is unavailable: no export configured for the tasks table"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
