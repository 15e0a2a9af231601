//! Milestone list handler for the sprint sheet MCP server

use super::parse_filter;
use crate::SprintServerHandler;
use crate::formatting;
use crate::sheet::MilestoneStatus;
use mcp_attr::Result as McpResult;

impl SprintServerHandler {
    /// Lists milestones, optionally restricted to one status.
    pub async fn handle_milestones(&self, status: Option<String>) -> McpResult<String> {
        let status_filter = parse_filter::<MilestoneStatus>("status", status.as_deref())?;

        let dataset = self.loader.current();
        let mut milestones = dataset.milestones.clone();
        if let Some(status) = status_filter {
            formatting::apply_milestone_status_filter(&mut milestones, status);
        }

        Ok(formatting::format_milestones(&milestones))
    }
}
