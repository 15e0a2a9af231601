//! Tests for load cycles against real and in-memory sources
mod common;

use common::{
    CONFIG_CSV, MEMBERS_CSV, MILESTONES_CSV, TASKS_CSV, config_for, sample_sheet_dir, write_table,
};
use sprint_sheet::sheet::{Dataset, DatasetOrigin, TableKind};
use sprint_sheet::{
    DirectorySource, LoadError, LoadObserver, Loader, MemorySource, SheetConfig, SourceError,
    TableSource,
};
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

fn memory_sheet() -> MemorySource {
    MemorySource::new()
        .with_table(TableKind::Config, CONFIG_CSV)
        .with_table(TableKind::Members, MEMBERS_CSV)
        .with_table(TableKind::Tasks, TASKS_CSV)
        .with_table(TableKind::Milestones, MILESTONES_CSV)
}

/// Serves `slow` with a delay to the first cycle and `fast` at once to later ones
struct StaggeredSource {
    calls: AtomicUsize,
    slow: MemorySource,
    fast: MemorySource,
}

impl TableSource for StaggeredSource {
    async fn fetch(&self, table: TableKind) -> Result<String, SourceError> {
        // the first cycle issues the first four fetches
        if self.calls.fetch_add(1, Ordering::SeqCst) < 4 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.slow.fetch(table).await
        } else {
            self.fast.fetch(table).await
        }
    }
}

#[derive(Default)]
struct Counters {
    loaded: AtomicUsize,
    warnings: AtomicUsize,
    fallbacks: AtomicUsize,
}

struct CountingObserver(Arc<Counters>);

impl LoadObserver for CountingObserver {
    fn on_loaded(&self, _dataset: &Dataset) {
        self.0.loaded.fetch_add(1, Ordering::SeqCst);
    }

    fn on_warnings(&self, warnings: &[String]) {
        self.0.warnings.fetch_add(warnings.len(), Ordering::SeqCst);
    }

    fn on_fallback(&self, _error: &LoadError) {
        self.0.fallbacks.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_placeholder_before_first_load() {
    let loader = Loader::new(memory_sheet());
    let current = loader.current();
    assert!(!current.loaded);
    assert_eq!(current.origin, DatasetOrigin::Fallback);
    assert!(loader.last_report().is_clean());
}

#[tokio::test]
async fn test_directory_load_publishes_snapshot() {
    let dir = sample_sheet_dir();
    let loader = Loader::new(DirectorySource::new(config_for(&dir)));

    let outcome = loader.load().await;
    assert!(!outcome.used_fallback());

    let current = loader.current();
    assert!(Arc::ptr_eq(&current, &outcome.dataset));
    assert_eq!(current.origin, DatasetOrigin::Sheet);
    assert_eq!(current.project.name, "Q1 Launch");
    assert_eq!(current.tasks.len(), 3);
}

#[tokio::test]
async fn test_memory_and_directory_sources_agree() {
    let dir = sample_sheet_dir();
    let from_disk = Loader::new(DirectorySource::new(config_for(&dir)))
        .load()
        .await;
    let from_memory = Loader::new(memory_sheet()).load().await;

    assert_eq!(*from_disk.dataset, *from_memory.dataset);
}

#[tokio::test]
async fn test_missing_milestones_file_degrades() {
    let dir = sample_sheet_dir();
    fs::remove_file(dir.path().join("milestones.csv")).unwrap();
    let loader = Loader::new(DirectorySource::new(config_for(&dir)));

    let outcome = loader.load().await;
    assert!(!outcome.used_fallback());
    assert!(loader.current().milestones.is_empty());
    assert_eq!(loader.current().team_members.len(), 2);

    let report = loader.last_report();
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Milestones unavailable"));
}

#[tokio::test]
async fn test_disabled_milestones_table() {
    let dir = sample_sheet_dir();
    let mut config = config_for(&dir);
    config.tables.milestones = String::new();
    let loader = Loader::new(DirectorySource::new(config));

    let outcome = loader.load().await;
    assert!(!outcome.used_fallback());
    assert!(outcome.dataset.milestones.is_empty());
}

#[tokio::test]
async fn test_missing_members_file_uses_fallback() {
    let dir = sample_sheet_dir();
    fs::remove_file(dir.path().join("members.csv")).unwrap();
    let loader = Loader::new(DirectorySource::new(config_for(&dir)));

    let outcome = loader.load().await;
    assert!(matches!(
        outcome.error,
        Some(LoadError::MissingTable {
            table: TableKind::Members,
            ..
        })
    ));

    let current = loader.current();
    assert!(current.loaded);
    assert!(current.is_fallback());
    assert_eq!(current.project.name, "Demo Sprint");
    assert!(current.error.as_deref().unwrap_or("").contains("members"));
}

#[tokio::test]
async fn test_recovers_after_sheet_is_fixed() {
    let dir = sample_sheet_dir();
    write_table(dir.path(), "tasks.csv", "<html><body>Sign in</body></html>");
    let loader = Loader::new(DirectorySource::new(config_for(&dir)));

    let first = loader.load().await;
    assert_eq!(
        first.error.map(|e| e.to_string()),
        Some("Invalid tasks data structure".to_string())
    );
    assert!(loader.current().is_fallback());

    write_table(dir.path(), "tasks.csv", TASKS_CSV);
    let second = loader.load().await;
    assert!(!second.used_fallback());
    assert!(!loader.current().is_fallback());
    assert!(loader.current().error.is_none());
}

#[tokio::test]
async fn test_old_snapshot_survives_reload() {
    let loader = Loader::new(memory_sheet());
    loader.load().await;
    let held = loader.current();

    loader.load().await;
    let fresh = loader.current();

    assert!(!Arc::ptr_eq(&held, &fresh));
    assert_eq!(*held, *fresh);
}

#[tokio::test]
async fn test_observer_is_notified() {
    let counters = Arc::new(Counters::default());
    let source = memory_sheet().with_table(TableKind::Tasks, "id,name\n");
    let loader = Loader::new(source).with_observer(CountingObserver(Arc::clone(&counters)));

    loader.load().await;
    assert_eq!(counters.loaded.load(Ordering::SeqCst), 1);
    // "Sheet has no tasks"
    assert_eq!(counters.warnings.load(Ordering::SeqCst), 1);
    assert_eq!(counters.fallbacks.load(Ordering::SeqCst), 0);

    let broken = Loader::new(MemorySource::new())
        .with_observer(CountingObserver(Arc::clone(&counters)));
    broken.load().await;
    assert_eq!(counters.loaded.load(Ordering::SeqCst), 2);
    assert_eq!(counters.fallbacks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_config_file_points_at_exports() {
    let root = TempDir::new().unwrap();
    let exports = root.path().join("exports");
    fs::create_dir(&exports).unwrap();
    write_table(&exports, "cfg.csv", CONFIG_CSV);
    write_table(&exports, "members.csv", MEMBERS_CSV);
    write_table(&exports, "tasks.csv", TASKS_CSV);

    let config_path = root.path().join("sheet.toml");
    fs::write(
        &config_path,
        "directory = \"exports\"\n\n[tables]\nconfig = \"cfg.csv\"\nmilestones = \"\"\n",
    )
    .unwrap();

    let config = SheetConfig::load(&config_path).unwrap();
    let outcome = Loader::new(DirectorySource::new(config)).load().await;
    assert!(!outcome.used_fallback());
    assert_eq!(outcome.dataset.project.name, "Q1 Launch");
    assert!(outcome.dataset.milestones.is_empty());
}

#[tokio::test]
async fn test_report_matches_published_dataset() {
    let loader = Loader::new(memory_sheet().with_table(TableKind::Tasks, "id,name\n"));
    let outcome = loader.load().await;

    let snapshot = loader.snapshot();
    assert!(Arc::ptr_eq(&snapshot.dataset, &outcome.dataset));
    assert_eq!(snapshot.report, outcome.report);
    assert_eq!(loader.last_report().warnings, vec!["Sheet has no tasks"]);
}

#[tokio::test]
async fn test_slow_older_cycle_does_not_overwrite_newer() {
    let source = StaggeredSource {
        calls: AtomicUsize::new(0),
        slow: memory_sheet().with_table(TableKind::Tasks, "id,name\n"),
        fast: memory_sheet(),
    };
    let loader = Loader::new(source);

    let (older, newer) = tokio::join!(loader.load(), loader.load());
    assert!(older.dataset.tasks.is_empty());
    assert_eq!(newer.dataset.tasks.len(), 3);

    let snapshot = loader.snapshot();
    assert!(Arc::ptr_eq(&snapshot.dataset, &newer.dataset));
    assert_eq!(snapshot.report, newer.report);
    assert!(loader.last_report().is_clean());
    assert_eq!(loader.current().tasks.len(), 3);
}
