use super::field;
use crate::csv::RawRow;
use crate::sanitize::{self, enum_with_aliases};
use crate::sheet::{Milestone, MilestoneStatus};

const ID: &[&str] = &["id", "Id", "ID"];
const DATE: &[&str] = &["date", "Date", "DATE", "dueDate", "due_date", "Due Date"];
const TITLE: &[&str] = &["title", "Title", "TITLE", "name", "Name", "milestone", "Milestone"];
const ASSIGNEE: &[&str] = &["assignee", "Assignee", "owner", "Owner"];
const STATUS: &[&str] = &["status", "Status", "STATUS"];
const DESCRIPTION: &[&str] = &["description", "Description", "details", "Details"];
const PROGRESS: &[&str] = &["progress", "Progress", "PROGRESS"];

/// Normalize the milestones table
///
/// Rows without a valid date or a title are dropped.
pub fn normalize_milestones(rows: &[RawRow]) -> Vec<Milestone> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_milestone(index, row))
        .filter(|m| m.date.is_some() && !m.title.is_empty())
        .collect()
}

fn normalize_milestone(index: usize, row: &RawRow) -> Milestone {
    let id = sanitize::identifier(field(row, ID));
    let title = sanitize::text(field(row, TITLE));
    let status = enum_with_aliases::<MilestoneStatus>(field(row, STATUS));

    let default_progress = if status == MilestoneStatus::Completed {
        100.0
    } else {
        0.0
    };
    let raw_progress = field(row, PROGRESS).trim();
    let progress = sanitize::numeric(
        raw_progress.strip_suffix('%').unwrap_or(raw_progress),
        default_progress,
    )
    .clamp(0.0, 100.0);

    Milestone {
        id: if id.is_empty() {
            format!("milestone-{index}")
        } else {
            id
        },
        date: sanitize::date(field(row, DATE)),
        title: if title.is_empty() {
            format!("Milestone {}", index + 1)
        } else {
            title
        },
        assignee: sanitize::text(field(row, ASSIGNEE)),
        status,
        description: sanitize::text(field(row, DESCRIPTION)),
        progress,
    }
}
