//! Table sources
//!
//! A [`TableSource`] hands the loader the raw CSV text of one logical table.
//! How the text is obtained (disk, HTTP export, cache) is the source's
//! business; retries and timeouts belong there as well.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;

use crate::config::SheetConfig;
use crate::error::SourceError;
use crate::sheet::TableKind;

/// Supplies the raw CSV export of each table
pub trait TableSource: Send + Sync {
    /// Fetch the full text of `table`
    fn fetch(&self, table: TableKind) -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// Reads CSV exports from files laid out by a [`SheetConfig`]
#[derive(Debug, Clone)]
pub struct DirectorySource {
    config: SheetConfig,
}

impl DirectorySource {
    pub fn new(config: SheetConfig) -> Self {
        Self { config }
    }
}

impl TableSource for DirectorySource {
    async fn fetch(&self, table: TableKind) -> Result<String, SourceError> {
        let path: PathBuf = self
            .config
            .path_for(table)
            .ok_or(SourceError::NotConfigured { table })?;

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SourceError::Io {
                table,
                path,
                source,
            })
    }
}

/// Serves table text held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<TableKind, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text of `table`
    pub fn with_table(mut self, table: TableKind, text: impl Into<String>) -> Self {
        self.tables.insert(table, text.into());
        self
    }
}

impl TableSource for MemorySource {
    async fn fetch(&self, table: TableKind) -> Result<String, SourceError> {
        self.tables
            .get(&table)
            .cloned()
            .ok_or(SourceError::NotConfigured { table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_directory_source_reads_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks.csv"), "name\nA\n").unwrap();
        let source = DirectorySource::new(SheetConfig::for_directory(dir.path()));

        let text = source.fetch(TableKind::Tasks).await.unwrap();
        assert_eq!(text, "name\nA\n");
    }

    #[tokio::test]
    async fn test_directory_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(SheetConfig::for_directory(dir.path()));

        let err = source.fetch(TableKind::Members).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::Io {
                table: TableKind::Members,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_directory_source_disabled_table() {
        let mut config = SheetConfig::for_directory("/nowhere");
        config.tables.milestones.clear();
        let source = DirectorySource::new(config);

        let err = source.fetch(TableKind::Milestones).await.unwrap_err();
        assert!(matches!(err, SourceError::NotConfigured { .. }));
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_table(TableKind::Config, "k,v\n");
        assert_eq!(source.fetch(TableKind::Config).await.unwrap(), "k,v\n");
        assert!(source.fetch(TableKind::Tasks).await.is_err());
    }
}
