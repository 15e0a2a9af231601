//! Tests for the MCP tool handlers
mod common;

use common::{config_for, sample_sheet_dir, write_table};
use sprint_sheet::SprintServerHandler;

async fn loaded_handler() -> (tempfile::TempDir, SprintServerHandler) {
    let dir = sample_sheet_dir();
    let handler = SprintServerHandler::new(config_for(&dir));
    handler.reload_now().await;
    (dir, handler)
}

#[tokio::test]
async fn test_serves_placeholder_until_reload() {
    let dir = sample_sheet_dir();
    let handler = SprintServerHandler::new(config_for(&dir));

    let current = handler.current();
    assert!(!current.loaded);
    assert_eq!(current.project.name, "Demo Sprint");
}

#[tokio::test]
async fn test_reload_reports_counts() {
    let dir = sample_sheet_dir();
    let handler = SprintServerHandler::new(config_for(&dir));

    let text = handler.handle_reload().await.unwrap();
    assert_eq!(
        text,
        "Loaded sheet: 2 member(s), 3 task(s), 2 milestone(s)\n"
    );
    assert_eq!(handler.current().project.name, "Q1 Launch");
}

#[tokio::test]
async fn test_reload_failure_reports_fallback() {
    let dir = sample_sheet_dir();
    write_table(dir.path(), "members.csv", "id,name\n");
    let handler = SprintServerHandler::new(config_for(&dir));

    let text = handler.handle_reload().await.unwrap();
    assert!(text.starts_with("Load failed, serving demo data instead: validation failed"));
    assert!(text.contains("Errors (1):\n- Sheet has no team members\n"));
    assert!(handler.current().is_fallback());
}

#[tokio::test]
async fn test_tasks_unfiltered() {
    let (_dir, handler) = loaded_handler().await;
    let text = handler.handle_tasks(None, None, None, None).await.unwrap();
    assert!(text.starts_with("Found 3 task(s):"));
    assert!(text.contains("- [api-1] Design API (status: completed, priority: urgent, owner: alice)"));
    assert!(text.contains("Jira: Q1-1 <https://jira.example.com/Q1-1>"));
}

#[tokio::test]
async fn test_tasks_status_filter_is_canonicalized() {
    let (_dir, handler) = loaded_handler().await;
    let text = handler
        .handle_tasks(Some("In Progress".to_string()), None, None, None)
        .await
        .unwrap();
    assert!(text.starts_with("Found 1 task(s):"));
    assert!(text.contains("[api-2]"));
}

#[tokio::test]
async fn test_tasks_combined_filters() {
    let (_dir, handler) = loaded_handler().await;

    let text = handler
        .handle_tasks(None, Some("BOB".to_string()), Some("normal".to_string()), None)
        .await
        .unwrap();
    assert!(text.starts_with("Found 1 task(s):"));

    let text = handler
        .handle_tasks(None, Some("unassigned".to_string()), None, Some("DOCS".to_string()))
        .await
        .unwrap();
    assert!(text.contains("[t-4] Write docs"));

    let text = handler
        .handle_tasks(None, Some("alice".to_string()), Some("low".to_string()), None)
        .await
        .unwrap();
    assert_eq!(text, "No tasks found");
}

#[tokio::test]
async fn test_tasks_blank_filters_are_ignored() {
    let (_dir, handler) = loaded_handler().await;
    let text = handler
        .handle_tasks(Some("  ".to_string()), Some(String::new()), None, None)
        .await
        .unwrap();
    assert!(text.starts_with("Found 3 task(s):"));
}

#[tokio::test]
async fn test_tasks_invalid_filter_is_rejected() {
    let (_dir, handler) = loaded_handler().await;
    assert!(
        handler
            .handle_tasks(Some("sleeping".to_string()), None, None, None)
            .await
            .is_err()
    );
    assert!(
        handler
            .handle_tasks(None, None, Some("whenever".to_string()), None)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_milestones_filter() {
    let (_dir, handler) = loaded_handler().await;

    let all = handler.handle_milestones(None).await.unwrap();
    assert!(all.starts_with("Found 2 milestone(s):"));
    assert!(all.contains("- [beta] 2025-03-14 Beta (status: in-progress, progress: 60%)"));

    let pending = handler
        .handle_milestones(Some("pending".to_string()))
        .await
        .unwrap();
    assert!(pending.starts_with("Found 1 milestone(s):"));
    assert!(pending.contains("[milestone-1]"));

    assert!(
        handler
            .handle_milestones(Some("someday".to_string()))
            .await
            .is_err()
    );
}
