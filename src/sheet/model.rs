use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{ColorClass, MilestoneStatus, Priority, TaskStatus};

/// Sprint-level settings read from the key/value config sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Sprint or project name (`sprint_name`)
    pub name: String,
    /// First day of the sprint; `None` when the sheet holds an unparseable date
    #[serde(with = "crate::sheet::serde_impl::optional_date")]
    pub start_date: Option<NaiveDate>,
    /// Last day of the sprint; ordering against `start_date` is not enforced
    #[serde(with = "crate::sheet::serde_impl::optional_date")]
    pub end_date: Option<NaiveDate>,
    /// Author of the plan (`prepared_by`), "Unknown" when absent
    pub prepared_by: String,
}

/// A person on the team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Slug used as the owner key on tasks
    pub id: String,
    pub name: String,
    pub role: String,
    pub color_class: ColorClass,
    /// Free-form capacity note (e.g. "80%", "part-time")
    pub capacity: String,
    pub focus: String,
    /// Hours available in the sprint
    pub bandwidth_hours: f64,
}

/// A unit of planned work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    /// Member id, or one of the pseudo owners "unassigned" / "both"
    pub owner: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(with = "crate::sheet::serde_impl::optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "crate::sheet::serde_impl::optional_date")]
    pub end_date: Option<NaiveDate>,
    pub jira_id: String,
    /// Link to the ticket; empty unless it is http(s) or an anchor
    pub jira_url: String,
    /// Business unit
    pub bu: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub blockers: String,
    pub notes: String,
    pub completed: bool,
    pub estimated_hours: f64,
}

impl Task {
    /// Whether the task counts as done, either by flag or by status
    pub fn is_done(&self) -> bool {
        self.completed || self.status == TaskStatus::Completed
    }
}

/// A dated checkpoint on the sprint timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    #[serde(with = "crate::sheet::serde_impl::optional_date")]
    pub date: Option<NaiveDate>,
    pub title: String,
    pub assignee: String,
    pub status: MilestoneStatus,
    pub description: String,
    /// Percentage in `[0, 100]`
    pub progress: f64,
}
