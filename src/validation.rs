//! Dataset validation
//!
//! Checks the four normalized collections together. Errors mean the load
//! cycle must be discarded; warnings are surfaced but do not block.

use serde::{Deserialize, Serialize};

use crate::sheet::{Member, Milestone, ProjectConfig, Task};

/// Result of validating one load cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Fatal problems, in input order
    pub errors: Vec<String>,
    /// Informational problems, in input order
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// At least one error: the dataset must be replaced by the fallback
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// All errors joined into one message
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validate a normalized dataset
///
/// # Arguments
/// * `project` - Project config from the config sheet
/// * `members` - Normalized team members
/// * `tasks` - Normalized tasks
/// * `milestones` - Normalized milestones
///
/// # Returns
/// A report listing errors and warnings in the order they were found
pub fn validate(
    project: &ProjectConfig,
    members: &[Member],
    tasks: &[Task],
    milestones: &[Milestone],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if project.name.trim().is_empty() {
        report.error("Project config is missing sprint_name");
    }
    if project.start_date.is_none() {
        report.error("Project config is missing start_date");
    }
    if project.end_date.is_none() {
        report.error("Project config is missing end_date");
    }

    if members.is_empty() {
        report.error("Sheet has no team members");
    }
    for (index, member) in members.iter().enumerate() {
        if member.name.trim().is_empty() {
            report.error(format!("Team member #{} is missing a name", index + 1));
        }
        if member.id.trim().is_empty() {
            report.warn(format!(
                "Team member '{}' is missing an id",
                display_name(&member.name, index)
            ));
        }
    }

    if tasks.is_empty() {
        report.warn("Sheet has no tasks");
    }
    for (index, task) in tasks.iter().enumerate() {
        if task.name.trim().is_empty() {
            report.error(format!("Task #{} is missing a name", index + 1));
        }
        if task.id.trim().is_empty() {
            report.warn(format!(
                "Task '{}' is missing an id",
                display_name(&task.name, index)
            ));
        }
        if task.owner.trim().is_empty() {
            report.warn(format!(
                "Task '{}' has no owner",
                display_name(&task.name, index)
            ));
        }
    }

    for (index, milestone) in milestones.iter().enumerate() {
        if milestone.date.is_none() {
            report.warn(format!(
                "Milestone '{}' is missing a date",
                display_name(&milestone.title, index)
            ));
        }
        if milestone.title.trim().is_empty() {
            report.warn(format!("Milestone #{} is missing a title", index + 1));
        }
    }

    report
}

fn display_name(name: &str, index: usize) -> String {
    if name.trim().is_empty() {
        format!("#{}", index + 1)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{ColorClass, MilestoneStatus, Priority, TaskStatus};
    use chrono::NaiveDate;

    fn project() -> ProjectConfig {
        ProjectConfig {
            name: "Sprint 1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 17),
            prepared_by: "Dana".to_string(),
        }
    }

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            role: String::new(),
            color_class: ColorClass::Primary,
            capacity: String::new(),
            focus: String::new(),
            bandwidth_hours: 40.0,
        }
    }

    fn task(id: &str, name: &str, owner: &str) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            owner: owner.to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Normal,
            start_date: None,
            end_date: None,
            jira_id: String::new(),
            jira_url: String::new(),
            bu: String::new(),
            task_type: String::new(),
            blockers: String::new(),
            notes: String::new(),
            completed: false,
            estimated_hours: 8.0,
        }
    }

    fn milestone(date: Option<NaiveDate>, title: &str) -> Milestone {
        Milestone {
            id: "m".to_string(),
            date,
            title: title.to_string(),
            assignee: String::new(),
            status: MilestoneStatus::Pending,
            description: String::new(),
            progress: 0.0,
        }
    }

    #[test]
    fn test_clean_dataset() {
        let report = validate(
            &project(),
            &[member("a", "A")],
            &[task("t1", "Do", "a")],
            &[milestone(NaiveDate::from_ymd_opt(2025, 1, 10), "M")],
        );
        assert!(report.is_clean());
        assert!(!report.is_fatal());
    }

    #[test]
    fn test_no_members_is_fatal() {
        let report = validate(&project(), &[], &[task("t1", "Do", "a")], &[]);
        assert!(report.is_fatal());
        assert!(report.errors.iter().any(|e| e.contains("no team members")));
    }

    #[test]
    fn test_member_without_id_is_only_a_warning() {
        let report = validate(&project(), &[member("", "A")], &[task("t1", "Do", "a")], &[]);
        assert!(!report.is_fatal());
        assert_eq!(report.warnings, vec!["Team member 'A' is missing an id"]);
    }

    #[test]
    fn test_missing_config_fields() {
        let config = ProjectConfig {
            name: " ".to_string(),
            start_date: None,
            end_date: None,
            prepared_by: "Unknown".to_string(),
        };
        let report = validate(&config, &[member("a", "A")], &[task("t", "T", "a")], &[]);
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[0].contains("sprint_name"));
        assert!(report.errors[1].contains("start_date"));
        assert!(report.errors[2].contains("end_date"));
    }

    #[test]
    fn test_nameless_records_are_errors() {
        let report = validate(
            &project(),
            &[member("a", "")],
            &[task("t", "", "a")],
            &[],
        );
        assert_eq!(
            report.errors,
            vec!["Team member #1 is missing a name", "Task #1 is missing a name"]
        );
    }

    #[test]
    fn test_warnings_in_input_order() {
        let report = validate(
            &project(),
            &[member("a", "A")],
            &[task("", "First", "a"), task("t2", "Second", "")],
            &[milestone(None, "Launch"), milestone(NaiveDate::from_ymd_opt(2025, 1, 1), "")],
        );
        assert!(!report.is_fatal());
        assert_eq!(
            report.warnings,
            vec![
                "Task 'First' is missing an id",
                "Task 'Second' has no owner",
                "Milestone 'Launch' is missing a date",
                "Milestone #2 is missing a title",
            ]
        );
    }

    #[test]
    fn test_no_tasks_is_a_warning() {
        let report = validate(&project(), &[member("a", "A")], &[], &[]);
        assert!(!report.is_fatal());
        assert_eq!(report.warnings, vec!["Sheet has no tasks"]);
    }

    #[test]
    fn test_error_message_joins_errors() {
        let report = validate(&project(), &[], &[task("t", "", "a")], &[]);
        assert_eq!(
            report.error_message(),
            "Sheet has no team members; Task #1 is missing a name"
        );
    }
}
