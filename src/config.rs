//! Sheet source configuration (TOML)
//!
//! ```toml
//! directory = "exports"
//!
//! [tables]
//! config = "config.csv"
//! members = "members.csv"
//! tasks = "tasks.csv"
//! milestones = "milestones.csv"   # "" skips the optional table
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sheet::TableKind;

/// Where the CSV exports of the four tables live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Base directory for relative file names
    pub directory: PathBuf,
    pub tables: TableFiles,
}

/// File name per table, relative to [`SheetConfig::directory`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFiles {
    pub config: String,
    pub members: String,
    pub tasks: String,
    pub milestones: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            tables: TableFiles::default(),
        }
    }
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            config: "config.csv".to_string(),
            members: "members.csv".to_string(),
            tasks: "tasks.csv".to_string(),
            milestones: "milestones.csv".to_string(),
        }
    }
}

impl SheetConfig {
    /// Default file names inside `directory`
    pub fn for_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load a config file; a missing file yields the defaults
    ///
    /// A relative `directory` is resolved against the config file's folder.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: SheetConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.directory.is_relative()
            && let Some(parent) = path.parent()
        {
            config.directory = parent.join(&config.directory);
        }
        Ok(config)
    }

    /// Full path of a table's export, `None` when the table is switched off
    pub fn path_for(&self, table: TableKind) -> Option<PathBuf> {
        let file = match table {
            TableKind::Config => &self.tables.config,
            TableKind::Members => &self.tables.members,
            TableKind::Tasks => &self.tables.tasks,
            TableKind::Milestones => &self.tables.milestones,
        };
        let file = file.trim();
        if file.is_empty() {
            None
        } else {
            Some(self.directory.join(file))
        }
    }
}
