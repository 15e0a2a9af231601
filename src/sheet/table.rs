use serde::{Deserialize, Serialize};
use std::fmt;

/// The four logical tables of a sprint sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Config,
    Members,
    Tasks,
    Milestones,
}

impl TableKind {
    /// All tables in load order
    pub const ALL: [TableKind; 4] = [
        TableKind::Config,
        TableKind::Members,
        TableKind::Tasks,
        TableKind::Milestones,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Config => "config",
            TableKind::Members => "members",
            TableKind::Tasks => "tasks",
            TableKind::Milestones => "milestones",
        }
    }

    /// Required tables abort the load cycle when missing; milestones degrade to empty
    pub fn is_required(self) -> bool {
        !matches!(self, TableKind::Milestones)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
