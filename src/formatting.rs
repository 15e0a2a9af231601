//! Formatting helper functions for the sprint sheet MCP server
//!
//! This module contains task filters and the text rendering used by the
//! MCP tools and the `--check` command.

use crate::sanitize::format_date;
use crate::sheet::{Dataset, Milestone, MilestoneStatus, Priority, Task, TaskStatus};
use crate::validation::ValidationReport;

/// Keep only tasks with the given status
pub fn apply_status_filter(tasks: &mut Vec<Task>, status: TaskStatus) {
    tasks.retain(|task| task.status == status);
}

/// Keep only tasks with the given priority
pub fn apply_priority_filter(tasks: &mut Vec<Task>, priority: Priority) {
    tasks.retain(|task| task.priority == priority);
}

/// Keep only tasks owned by `owner` (compared as a slug)
pub fn apply_owner_filter(tasks: &mut Vec<Task>, owner: &str) {
    let owner = owner.trim().to_lowercase();
    tasks.retain(|task| task.owner == owner);
}

/// Apply keyword filtering (case-insensitive search in id, name, Jira id and notes)
pub fn apply_keyword_filter(tasks: &mut Vec<Task>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    tasks.retain(|task| {
        [&task.id, &task.name, &task.jira_id, &task.notes]
            .iter()
            .any(|field| field.to_lowercase().contains(&keyword_lower))
    });
}

/// Keep only milestones with the given status
pub fn apply_milestone_status_filter(milestones: &mut Vec<Milestone>, status: MilestoneStatus) {
    milestones.retain(|m| m.status == status);
}

fn date_range(start: &str, end: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        _ => Some(format!("{} → {}", start, end)),
    }
}

/// Summary of the project, load state and counts
pub fn format_overview(dataset: &Dataset) -> String {
    let project = &dataset.project;
    let mut result = format!("Project: {}\n", project.name);

    if let Some(range) = date_range(
        &format_date(project.start_date),
        &format_date(project.end_date),
    ) {
        result.push_str(&format!("Dates: {}\n", range));
    }
    result.push_str(&format!("Prepared by: {}\n", project.prepared_by));

    let source = if !dataset.loaded {
        "demo data (not loaded yet)"
    } else if dataset.is_fallback() {
        "demo data (fallback)"
    } else {
        "sheet"
    };
    result.push_str(&format!("Source: {}\n", source));
    if let Some(ref error) = dataset.error {
        result.push_str(&format!("Load error: {}\n", error));
    }

    result.push_str(&format!(
        "Team members: {}\nTasks: {} ({}% complete)\nMilestones: {}\n",
        dataset.team_members.len(),
        dataset.tasks.len(),
        dataset.completion_percent(),
        dataset.milestones.len()
    ));

    result
}

/// Team members with their task counts and open hour load
pub fn format_members(dataset: &Dataset) -> String {
    if dataset.team_members.is_empty() {
        return "No team members found".to_string();
    }

    let mut result = format!("Found {} team member(s):\n\n", dataset.team_members.len());
    for member in &dataset.team_members {
        result.push_str(&format!(
            "- [{}] {} ({}, {})\n",
            member.id, member.name, member.role, member.color_class
        ));
        if !member.focus.is_empty() {
            result.push_str(&format!("  Focus: {}\n", member.focus));
        }
        if !member.capacity.is_empty() {
            result.push_str(&format!("  Capacity: {}\n", member.capacity));
        }
        result.push_str(&format!(
            "  Tasks: {}, open hours: {} / {}\n",
            dataset.tasks_for(&member.id).len(),
            dataset.open_hours_for(&member.id),
            member.bandwidth_hours
        ));
    }

    result
}

/// Format tasks into a display string
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (status: {}, priority: {}, owner: {})\n",
            task.id, task.name, task.status, task.priority, task.owner
        ));

        if let Some(range) = date_range(&format_date(task.start_date), &format_date(task.end_date))
        {
            result.push_str(&format!("  Dates: {}\n", range));
        }
        if !task.jira_id.is_empty() {
            result.push_str(&format!("  Jira: {}", task.jira_id));
            if !task.jira_url.is_empty() {
                result.push_str(&format!(" <{}>", task.jira_url));
            }
            result.push('\n');
        }
        if !task.blockers.is_empty() {
            result.push_str(&format!("  Blockers: {}\n", task.blockers));
        }
        if !task.notes.is_empty() {
            result.push_str(&format!("  Notes: {}\n", task.notes));
        }
        result.push_str(&format!("  Estimate: {}h\n", task.estimated_hours));
    }

    result
}

/// Format milestones into a display string
pub fn format_milestones(milestones: &[Milestone]) -> String {
    if milestones.is_empty() {
        return "No milestones found".to_string();
    }

    let mut result = format!("Found {} milestone(s):\n\n", milestones.len());
    for milestone in milestones {
        result.push_str(&format!(
            "- [{}] {} {} (status: {}, progress: {}%)\n",
            milestone.id,
            format_date(milestone.date),
            milestone.title,
            milestone.status,
            milestone.progress
        ));
        if !milestone.assignee.is_empty() {
            result.push_str(&format!("  Assignee: {}\n", milestone.assignee));
        }
        if !milestone.description.is_empty() {
            result.push_str(&format!("  {}\n", milestone.description));
        }
    }

    result
}

/// Errors and warnings, one per line
pub fn format_report(report: &ValidationReport) -> String {
    if report.is_clean() {
        return "Validation passed with no errors or warnings".to_string();
    }

    let mut result = String::new();
    if !report.errors.is_empty() {
        result.push_str(&format!("Errors ({}):\n", report.errors.len()));
        for error in &report.errors {
            result.push_str(&format!("- {}\n", error));
        }
    }
    if !report.warnings.is_empty() {
        result.push_str(&format!("Warnings ({}):\n", report.warnings.len()));
        for warning in &report.warnings {
            result.push_str(&format!("- {}\n", warning));
        }
    }

    result
}
