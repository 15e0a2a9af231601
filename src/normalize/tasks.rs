use super::field;
use crate::csv::RawRow;
use crate::sanitize::{self, enum_with_aliases};
use crate::sheet::{Priority, Task, TaskStatus};

const ID: &[&str] = &["id", "Id", "ID"];
const NAME: &[&str] = &["name", "Name", "NAME", "title", "Title", "task", "Task"];
const OWNER: &[&str] = &["owner", "Owner", "OWNER", "assignee", "Assignee"];
const STATUS: &[&str] = &["status", "Status", "STATUS"];
const PRIORITY: &[&str] = &["priority", "Priority", "PRIORITY"];
const START_DATE: &[&str] = &["startDate", "StartDate", "start_date", "Start Date", "start"];
const END_DATE: &[&str] = &[
    "endDate", "EndDate", "end_date", "End Date", "end", "dueDate", "due_date", "Due Date",
];
const JIRA_ID: &[&str] = &["jiraId", "JiraId", "jira_id", "Jira ID", "JIRA ID", "jira", "Jira"];
const JIRA_URL: &[&str] = &["jiraUrl", "JiraUrl", "jira_url", "Jira URL", "JIRA URL"];
const BU: &[&str] = &["bu", "BU", "Bu", "businessUnit", "business_unit"];
const TYPE: &[&str] = &["type", "Type", "TYPE"];
const BLOCKERS: &[&str] = &["blockers", "Blockers", "blocker", "Blocker"];
const NOTES: &[&str] = &["notes", "Notes", "note", "Note"];
const COMPLETED: &[&str] = &["completed", "Completed", "COMPLETED"];
const ESTIMATED_HOURS: &[&str] = &[
    "estimatedHours",
    "EstimatedHours",
    "estimated_hours",
    "Estimated Hours",
    "hours",
    "Hours",
];

const DEFAULT_OWNER: &str = "unassigned";
const DEFAULT_ESTIMATED_HOURS: f64 = 8.0;

/// Normalize the tasks table
///
/// Rows without a name are dropped, as are rows whose dates are not either
/// both empty or both present with start on or before end.
pub fn normalize_tasks(rows: &[RawRow]) -> Vec<Task> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_task(index, row))
        .filter(|task| !task.name.is_empty() && has_valid_dates(task))
        .collect()
}

fn normalize_task(index: usize, row: &RawRow) -> Task {
    let id = sanitize::identifier(field(row, ID));
    let owner = sanitize::identifier(field(row, OWNER));

    Task {
        // Generated ids are slugs like explicit ones
        id: if id.is_empty() {
            format!("t-{}", index + 1)
        } else {
            id
        },
        name: sanitize::text(field(row, NAME)),
        owner: if owner.is_empty() {
            DEFAULT_OWNER.to_string()
        } else {
            owner
        },
        status: enum_with_aliases::<TaskStatus>(field(row, STATUS)),
        priority: enum_with_aliases::<Priority>(field(row, PRIORITY)),
        start_date: sanitize::date(field(row, START_DATE)),
        end_date: sanitize::date(field(row, END_DATE)),
        jira_id: sanitize::text(field(row, JIRA_ID)),
        jira_url: sanitize::url(field(row, JIRA_URL)),
        bu: sanitize::text(field(row, BU)),
        task_type: sanitize::text(field(row, TYPE)),
        blockers: sanitize::text(field(row, BLOCKERS)),
        notes: sanitize::text(field(row, NOTES)),
        completed: sanitize::boolean(field(row, COMPLETED)),
        estimated_hours: sanitize::positive_numeric(
            field(row, ESTIMATED_HOURS),
            DEFAULT_ESTIMATED_HOURS,
        ),
    }
}

fn has_valid_dates(task: &Task) -> bool {
    match (task.start_date, task.end_date) {
        (None, None) => true,
        (Some(start), Some(end)) => start <= end,
        _ => false,
    }
}
