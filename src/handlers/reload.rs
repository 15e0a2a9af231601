//! Reload handler for the sprint sheet MCP server

use crate::SprintServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl SprintServerHandler {
    /// Runs a load cycle and reports what is now being served.
    pub async fn handle_reload(&self) -> McpResult<String> {
        let outcome = self.loader.load().await;

        let mut result = match &outcome.error {
            None => format!(
                "Loaded sheet: {} member(s), {} task(s), {} milestone(s)\n",
                outcome.dataset.team_members.len(),
                outcome.dataset.tasks.len(),
                outcome.dataset.milestones.len()
            ),
            Some(err) => format!("Load failed, serving demo data instead: {}\n", err),
        };

        if !outcome.report.is_clean() {
            result.push('\n');
            result.push_str(&formatting::format_report(&outcome.report));
        }

        Ok(result)
    }
}
