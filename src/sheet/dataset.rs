use serde::{Deserialize, Serialize};

use super::model::{Member, Milestone, ProjectConfig, Task};

/// Where the records of a [`Dataset`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetOrigin {
    /// Normalized from the shared sheet
    Sheet,
    /// The built-in demo data
    Fallback,
}

/// Immutable snapshot produced by one load cycle
///
/// A snapshot is never edited in place; the next cycle builds a new one and
/// the loader swaps it in whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub project: ProjectConfig,
    pub team_members: Vec<Member>,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    /// False until a load cycle has completed
    pub loaded: bool,
    pub origin: DatasetOrigin,
    /// Why the fallback was substituted, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Dataset {
    /// A successfully loaded snapshot built from sheet data
    pub fn from_sheet(
        project: ProjectConfig,
        team_members: Vec<Member>,
        tasks: Vec<Task>,
        milestones: Vec<Milestone>,
    ) -> Self {
        Self {
            project,
            team_members,
            tasks,
            milestones,
            loaded: true,
            origin: DatasetOrigin::Sheet,
            error: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DatasetOrigin::Fallback
    }

    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.team_members.iter().find(|m| m.id == id)
    }

    /// Tasks owned by `owner`
    pub fn tasks_for(&self, owner: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.owner == owner).collect()
    }

    /// Estimated hours of the open tasks owned by `owner`
    pub fn open_hours_for(&self, owner: &str) -> f64 {
        self.tasks
            .iter()
            .filter(|t| t.owner == owner && !t.is_done())
            .map(|t| t.estimated_hours)
            .sum()
    }

    /// Share of tasks done, rounded to a whole percent (0 with no tasks)
    pub fn completion_percent(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.tasks.iter().filter(|t| t.is_done()).count();
        ((done as f64 / self.tasks.len() as f64) * 100.0).round() as u32
    }
}
