//! Sprint Sheet Library
//!
//! Turns the CSV exports of a shared sprint-planning spreadsheet into typed
//! records (project config, team members, tasks, milestones), validates them
//! and falls back to built-in demo data when a load cycle fails. The current
//! snapshot is served to MCP clients.
//!
//! # Architecture
//!
//! The pipeline runs leaves first:
//! - **Parsing**: `csv` - line tokenizer and header-keyed table parser
//! - **Coercion**: `sanitize` - total field sanitizers with defaults
//! - **Normalization**: `normalize` - one normalizer per logical table
//! - **Validation**: `validation` - errors (fatal) and warnings
//! - **Orchestration**: `loader` - concurrent fetch, fallback, snapshot swap
//! - **MCP Layer**: `SprintServerHandler` - exposes the snapshot as tools
//!
//! # Example
//!
//! ```
//! use sprint_sheet::loader::{RawTables, load_from_text};
//!
//! let outcome = load_from_text(RawTables::from_text(
//!     "key,value\nsprint_name,Sprint 1\nstart_date,2025-01-06\nend_date,2025-01-17\n",
//!     "id,name\nalice,Alice\n",
//!     "name,owner\nWrite docs,alice\n",
//!     "date,title\n2025-01-17,Demo\n",
//! ));
//! assert!(!outcome.used_fallback());
//! assert_eq!(outcome.dataset.tasks[0].owner, "alice");
//! ```

pub mod config;
pub mod csv;
pub mod error;
pub mod fallback;
pub mod formatting;
pub mod handlers;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod sanitize;
pub mod sheet;
pub mod source;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Arc;

// Re-export commonly used types
pub use config::SheetConfig;
pub use error::{LoadError, SourceError};
pub use loader::{LoadObserver, LoadOutcome, Loader, Snapshot};
pub use sheet::{Dataset, Member, Milestone, ProjectConfig, Task};
pub use source::{DirectorySource, MemorySource, TableSource};
pub use validation::ValidationReport;

/// MCP Server handler for the sprint sheet
///
/// Holds the loader whose current snapshot every tool reads. Tools never
/// see a half-loaded dataset: a reload publishes its result in one swap.
pub struct SprintServerHandler {
    pub(crate) loader: Loader<DirectorySource>,
}

impl SprintServerHandler {
    /// Create a handler reading the exports described by `config`
    ///
    /// No data is read until [`reload_now`](Self::reload_now) or the `reload` tool runs;
    /// until then the demo dataset is served, marked as not loaded.
    pub fn new(config: SheetConfig) -> Self {
        Self {
            loader: Loader::new(DirectorySource::new(config)),
        }
    }

    /// Run a load cycle outside of MCP (startup, `--check`)
    pub async fn reload_now(&self) -> LoadOutcome {
        self.loader.load().await
    }

    /// The snapshot currently served
    pub fn current(&self) -> Arc<Dataset> {
        self.loader.current()
    }
}

/// Sprint dashboard server backed by a shared planning spreadsheet.
///
/// The sheet has four tables: project config, team members, tasks and milestones.
/// Data is re-read only when `reload` is called. If the sheet cannot be read or
/// fails validation, built-in demo data is served and `overview` says so.
///
/// Task statuses: in-progress, todo, completed, blocked, review, pending
/// Priorities: urgent, normal, low
/// Milestone statuses: pending, in-progress, completed, blocked
#[mcp_server]
impl McpServer for SprintServerHandler {
    /// **Reload**: Re-read all sheet tables, validate them and swap in the new data.
    /// Returns counts plus any validation errors/warnings.
    #[tool]
    async fn reload(&self) -> McpResult<String> {
        self.handle_reload().await
    }

    /// **Overview**: Project name, sprint dates, data source and counts with completion percentage.
    #[tool]
    async fn overview(&self) -> McpResult<String> {
        Ok(formatting::format_overview(&self.loader.current()))
    }

    /// **Team**: List team members with role, focus, task count and open hours vs bandwidth.
    #[tool]
    async fn members(&self) -> McpResult<String> {
        Ok(formatting::format_members(&self.loader.current()))
    }

    /// **Tasks**: List tasks, optionally filtered. All filters combine (AND).
    #[tool]
    async fn tasks(
        &self,
        /// Status filter: in-progress/todo/completed/blocked/review/pending (optional)
        status: Option<String>,
        /// Owner member id, or "unassigned"/"both" (optional)
        owner: Option<String>,
        /// Priority filter: urgent/normal/low (optional)
        priority: Option<String>,
        /// Case-insensitive search in id, name, Jira id and notes (optional)
        keyword: Option<String>,
    ) -> McpResult<String> {
        self.handle_tasks(status, owner, priority, keyword).await
    }

    /// **Milestones**: List sprint milestones with date, status and progress.
    #[tool]
    async fn milestones(
        &self,
        /// Status filter: pending/in-progress/completed/blocked (optional)
        status: Option<String>,
    ) -> McpResult<String> {
        self.handle_milestones(status).await
    }

    /// **Validation**: Errors and warnings from the most recent reload.
    #[tool]
    async fn validation_report(&self) -> McpResult<String> {
        Ok(formatting::format_report(&self.loader.last_report()))
    }
}
