//! Common test utilities for integration tests
#![allow(dead_code)]

use sprint_sheet::SheetConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const CONFIG_CSV: &str = "\
Key,Value
sprint_name,Q1 Launch
start_date,2025-03-03
end_date,2025-03-28
prepared_by,Dana Scully
";

pub const MEMBERS_CSV: &str = "\
id,name,role,colorClass,capacity,focus,bandwidthHours
alice,Alice Chen,Tech Lead,primary,80%,Architecture,32
bob,Bob Diaz,Backend,,100%,\"APIs, data\",
,Nobody,Ghost,,,,
";

pub const TASKS_CSV: &str = "\
id,name,owner,status,priority,startDate,endDate,jiraId,jiraUrl,completed,estimatedHours
API-1,Design API,alice,Done,High,2025-03-03,2025-03-05,Q1-1,https://jira.example.com/Q1-1,true,6
API-2,Build API,bob,In Progress,medium,2025-03-06,2025-03-14,Q1-2,not a url,false,24
API-3,Ship it,bob,todo,low,2025-03-10,2025-03-01,Q1-3,,false,4
,Write docs,,,,,,,,,
";

pub const MILESTONES_CSV: &str = "\
id,date,title,assignee,status,description,progress
beta,2025-03-14,Beta,Alice Chen,in progress,Pilot users onboarded,60%
,2025-03-28,Launch,Bob Diaz,upcoming,,
,,No date,,,,
";

/// Write the four sample tables into a fresh temporary directory
pub fn sample_sheet_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_table(dir.path(), "config.csv", CONFIG_CSV);
    write_table(dir.path(), "members.csv", MEMBERS_CSV);
    write_table(dir.path(), "tasks.csv", TASKS_CSV);
    write_table(dir.path(), "milestones.csv", MILESTONES_CSV);
    dir
}

pub fn write_table(dir: &Path, file: &str, text: &str) {
    fs::write(dir.join(file), text).unwrap();
}

pub fn config_for(dir: &TempDir) -> SheetConfig {
    SheetConfig::for_directory(dir.path())
}
