//! Sprint sheet domain models
//!
//! This module contains the typed records produced by normalization:
//! - `model`: project config, members, tasks and milestones
//! - `status`: canonical enums (task status, priority, milestone status, colour class)
//! - `dataset`: the immutable snapshot handed to consumers
//! - `table`: names of the four logical tables
//! - `serde_impl`: date encoding shared by the records

mod dataset;
mod model;
mod serde_impl;
mod status;
mod table;

pub use dataset::{Dataset, DatasetOrigin};
pub use model::{Member, Milestone, ProjectConfig, Task};
pub use status::{ColorClass, MilestoneStatus, Priority, TaskStatus};
pub use table::TableKind;

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
