//! Built-in demo dataset
//!
//! Substituted whenever a load cycle fails so consumers always have a
//! complete, self-consistent dataset to show.

use chrono::NaiveDate;

use crate::sheet::{
    ColorClass, Dataset, DatasetOrigin, Member, Milestone, MilestoneStatus, Priority,
    ProjectConfig, Task, TaskStatus,
};

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn member(
    id: &str,
    name: &str,
    role: &str,
    color_class: ColorClass,
    capacity: &str,
    focus: &str,
    bandwidth_hours: f64,
) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        color_class,
        capacity: capacity.to_string(),
        focus: focus.to_string(),
        bandwidth_hours,
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    name: &str,
    owner: &str,
    status: TaskStatus,
    priority: Priority,
    dates: (Option<NaiveDate>, Option<NaiveDate>),
    jira_id: &str,
    estimated_hours: f64,
) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        owner: owner.to_string(),
        status,
        priority,
        start_date: dates.0,
        end_date: dates.1,
        jira_id: jira_id.to_string(),
        jira_url: "#".to_string(),
        bu: "Platform".to_string(),
        task_type: "Feature".to_string(),
        blockers: String::new(),
        notes: String::new(),
        completed: status == TaskStatus::Completed,
        estimated_hours,
    }
}

fn milestone(
    id: &str,
    date: Option<NaiveDate>,
    title: &str,
    assignee: &str,
    status: MilestoneStatus,
    description: &str,
    progress: f64,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        date,
        title: title.to_string(),
        assignee: assignee.to_string(),
        status,
        description: description.to_string(),
        progress,
    }
}

/// The demo dataset, marked as loaded
pub fn dataset() -> Dataset {
    let project = ProjectConfig {
        name: "Demo Sprint".to_string(),
        start_date: ymd(2025, 1, 6),
        end_date: ymd(2025, 1, 31),
        prepared_by: "Sprint Sheet".to_string(),
    };

    let team_members = vec![
        member("alex", "Alex Morgan", "Tech Lead", ColorClass::Primary, "80%", "Architecture", 32.0),
        member("sam", "Sam Rivera", "Backend Engineer", ColorClass::Success, "100%", "APIs", 40.0),
        member("jordan", "Jordan Lee", "Frontend Engineer", ColorClass::Info, "100%", "Dashboard", 40.0),
    ];

    let tasks = vec![
        task(
            "t-1",
            "Define sprint scope",
            "alex",
            TaskStatus::Completed,
            Priority::Urgent,
            (ymd(2025, 1, 6), ymd(2025, 1, 7)),
            "DEMO-1",
            4.0,
        ),
        task(
            "t-2",
            "Build import API",
            "sam",
            TaskStatus::InProgress,
            Priority::Urgent,
            (ymd(2025, 1, 8), ymd(2025, 1, 17)),
            "DEMO-2",
            24.0,
        ),
        task(
            "t-3",
            "Dashboard timeline view",
            "jordan",
            TaskStatus::Todo,
            Priority::Normal,
            (ymd(2025, 1, 13), ymd(2025, 1, 24)),
            "DEMO-3",
            20.0,
        ),
        task(
            "t-4",
            "Review data contracts",
            "both",
            TaskStatus::Review,
            Priority::Normal,
            (ymd(2025, 1, 15), ymd(2025, 1, 16)),
            "DEMO-4",
            6.0,
        ),
        task(
            "t-5",
            "Load testing",
            "unassigned",
            TaskStatus::Pending,
            Priority::Low,
            (None, None),
            "DEMO-5",
            8.0,
        ),
    ];

    let milestones = vec![
        milestone(
            "kickoff",
            ymd(2025, 1, 6),
            "Sprint kickoff",
            "Alex Morgan",
            MilestoneStatus::Completed,
            "Scope agreed with stakeholders",
            100.0,
        ),
        milestone(
            "beta",
            ymd(2025, 1, 17),
            "Beta release",
            "Sam Rivera",
            MilestoneStatus::InProgress,
            "Import API available to pilot users",
            50.0,
        ),
        milestone(
            "launch",
            ymd(2025, 1, 31),
            "Launch",
            "Jordan Lee",
            MilestoneStatus::Pending,
            "Dashboard live for all teams",
            0.0,
        ),
    ];

    Dataset {
        project,
        team_members,
        tasks,
        milestones,
        loaded: true,
        origin: DatasetOrigin::Fallback,
        error: None,
    }
}

/// The demo dataset before any load cycle has run
pub fn placeholder() -> Dataset {
    Dataset {
        loaded: false,
        ..dataset()
    }
}

/// The demo dataset substituted after a failed cycle
pub fn with_error(message: impl Into<String>) -> Dataset {
    Dataset {
        error: Some(message.into()),
        ..dataset()
    }
}
