//! Task list handler for the sprint sheet MCP server

use super::parse_filter;
use crate::SprintServerHandler;
use crate::formatting;
use crate::sheet::{Priority, TaskStatus};
use mcp_attr::Result as McpResult;

impl SprintServerHandler {
    /// Handles task list/filter operations - applies filters and formats results for display.
    pub async fn handle_tasks(
        &self,
        status: Option<String>,
        owner: Option<String>,
        priority: Option<String>,
        keyword: Option<String>,
    ) -> McpResult<String> {
        // Validate filters before touching the snapshot
        let status_filter = parse_filter::<TaskStatus>("status", status.as_deref())?;
        let priority_filter = parse_filter::<Priority>("priority", priority.as_deref())?;

        let dataset = self.loader.current();
        let mut tasks = dataset.tasks.clone();

        if let Some(status) = status_filter {
            formatting::apply_status_filter(&mut tasks, status);
        }

        if let Some(priority) = priority_filter {
            formatting::apply_priority_filter(&mut tasks, priority);
        }

        if let Some(ref owner_filter) = owner
            && !owner_filter.trim().is_empty()
        {
            formatting::apply_owner_filter(&mut tasks, owner_filter);
        }

        if let Some(ref keyword_filter) = keyword {
            formatting::apply_keyword_filter(&mut tasks, keyword_filter);
        }

        Ok(formatting::format_tasks(&tasks))
    }
}
