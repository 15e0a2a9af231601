use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::sanitize::CanonicalEnum;

/// Implements `as_str`, `Display` and strict `FromStr` for a canonical enum
macro_rules! canonical_strings {
    ($ty:ident) => {
        impl $ty {
            /// Canonical spelling used in exports and serialization
            pub fn as_str(self) -> &'static str {
                <$ty as CanonicalEnum>::VARIANTS
                    .iter()
                    .find(|(_, v)| *v == self)
                    .map(|(name, _)| *name)
                    .unwrap_or_default()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as CanonicalEnum>::VARIANTS
                    .iter()
                    .find(|(name, _)| *name == s)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| {
                        let names: Vec<&str> = <$ty as CanonicalEnum>::VARIANTS
                            .iter()
                            .map(|(name, _)| *name)
                            .collect();
                        format!(
                            "Invalid value '{}'. Valid options are: {}",
                            s,
                            names.join(", ")
                        )
                    })
            }
        }
    };
}

/// Bootstrap-style colour badge assigned to a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorClass {
    Primary,
    Success,
    Warning,
    Info,
    Danger,
}

impl CanonicalEnum for ColorClass {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("primary", ColorClass::Primary),
        ("success", ColorClass::Success),
        ("warning", ColorClass::Warning),
        ("info", ColorClass::Info),
        ("danger", ColorClass::Danger),
    ];
    const ALIASES: &'static [(&'static str, Self)] = &[];
    const DEFAULT: Self = ColorClass::Primary;
}

canonical_strings!(ColorClass);

/// Workflow state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    InProgress,
    Todo,
    Completed,
    Blocked,
    Review,
    Pending,
}

impl CanonicalEnum for TaskStatus {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("in-progress", TaskStatus::InProgress),
        ("todo", TaskStatus::Todo),
        ("completed", TaskStatus::Completed),
        ("blocked", TaskStatus::Blocked),
        ("review", TaskStatus::Review),
        ("pending", TaskStatus::Pending),
    ];
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("not-started", TaskStatus::Todo),
        ("notstarted", TaskStatus::Todo),
        ("inprogress", TaskStatus::InProgress),
        ("done", TaskStatus::Completed),
        ("complete", TaskStatus::Completed),
        ("in-review", TaskStatus::Review),
        ("reviewing", TaskStatus::Review),
    ];
    const DEFAULT: Self = TaskStatus::Todo;
}

canonical_strings!(TaskStatus);

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Urgent,
    Normal,
    Low,
}

impl CanonicalEnum for Priority {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("urgent", Priority::Urgent),
        ("normal", Priority::Normal),
        ("low", Priority::Low),
    ];
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("high", Priority::Urgent),
        ("critical", Priority::Urgent),
        ("medium", Priority::Normal),
        ("pending", Priority::Low),
    ];
    const DEFAULT: Self = Priority::Normal;
}

canonical_strings!(Priority);

/// Milestone progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl CanonicalEnum for MilestoneStatus {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("pending", MilestoneStatus::Pending),
        ("in-progress", MilestoneStatus::InProgress),
        ("completed", MilestoneStatus::Completed),
        ("blocked", MilestoneStatus::Blocked),
    ];
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("not-started", MilestoneStatus::Pending),
        ("notstarted", MilestoneStatus::Pending),
        ("upcoming", MilestoneStatus::Pending),
        ("inprogress", MilestoneStatus::InProgress),
        ("done", MilestoneStatus::Completed),
        ("complete", MilestoneStatus::Completed),
    ];
    const DEFAULT: Self = MilestoneStatus::Pending;
}

canonical_strings!(MilestoneStatus);
