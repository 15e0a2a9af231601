//! Load cycle orchestration
//!
//! One cycle fetches the four tables concurrently, normalizes each, runs a
//! single validation over the result and either publishes the new snapshot
//! or substitutes the fallback dataset. Config, members and tasks are
//! required; a missing milestones table degrades to an empty list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::csv::{Table, parse_table_with_headers};
use crate::error::{LoadError, SourceError};
use crate::fallback;
use crate::normalize::{
    config_rows, normalize_config, normalize_members, normalize_milestones, normalize_tasks,
};
use crate::sheet::{Dataset, TableKind};
use crate::source::TableSource;
use crate::validation::{ValidationReport, validate};

/// Raw text of the four tables as returned by a source
#[derive(Debug)]
pub struct RawTables {
    pub config: Result<String, SourceError>,
    pub members: Result<String, SourceError>,
    pub tasks: Result<String, SourceError>,
    pub milestones: Result<String, SourceError>,
}

impl RawTables {
    /// All four tables available as text
    pub fn from_text(
        config: impl Into<String>,
        members: impl Into<String>,
        tasks: impl Into<String>,
        milestones: impl Into<String>,
    ) -> Self {
        Self {
            config: Ok(config.into()),
            members: Ok(members.into()),
            tasks: Ok(tasks.into()),
            milestones: Ok(milestones.into()),
        }
    }
}

/// Result of one load cycle
#[derive(Debug)]
pub struct LoadOutcome {
    /// The snapshot now being served (sheet data or fallback)
    pub dataset: Arc<Dataset>,
    /// Validation results; empty when the cycle failed before validation
    pub report: ValidationReport,
    /// Why the fallback was substituted
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    pub fn used_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Hooks a caller can inject to react to load cycles
///
/// Every method has an empty default so implementors pick what they need.
pub trait LoadObserver: Send + Sync {
    /// A cycle finished and `dataset` is now current
    fn on_loaded(&self, _dataset: &Dataset) {}
    /// Non-fatal validation warnings were produced
    fn on_warnings(&self, _warnings: &[String]) {}
    /// The fallback dataset was substituted
    fn on_fallback(&self, _error: &LoadError) {}
}

/// One published load cycle: the dataset together with the report it was validated with
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    pub report: ValidationReport,
    /// Sequence number of the cycle that produced it; 0 for the initial placeholder
    pub cycle: u64,
}

/// Holds the current snapshot; readers clone it, writers swap dataset and report together
#[derive(Debug)]
pub struct DatasetStore {
    current: Mutex<Snapshot>,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(fallback::placeholder())
    }
}

impl DatasetStore {
    pub fn new(initial: Dataset) -> Self {
        Self {
            current: Mutex::new(Snapshot {
                dataset: Arc::new(initial),
                report: ValidationReport::default(),
                cycle: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The dataset readers should use right now
    pub fn current(&self) -> Arc<Dataset> {
        Arc::clone(&self.lock().dataset)
    }

    /// Report of the cycle that produced [`current`](Self::current)
    pub fn report(&self) -> ValidationReport {
        self.lock().report.clone()
    }

    /// Dataset and report as one consistent pair
    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    /// Publish the result of `cycle`
    ///
    /// A cycle older than the one already published is discarded, so a slow
    /// fetch never overwrites newer data. Returns whether it was published.
    pub fn publish(&self, cycle: u64, dataset: Arc<Dataset>, report: ValidationReport) -> bool {
        let mut guard = self.lock();
        if cycle < guard.cycle {
            return false;
        }
        *guard = Snapshot {
            dataset,
            report,
            cycle,
        };
        true
    }
}

/// Runs load cycles against a [`TableSource`] and keeps the latest snapshot
pub struct Loader<S> {
    source: S,
    store: DatasetStore,
    next_cycle: AtomicU64,
    observer: Option<Box<dyn LoadObserver>>,
}

impl<S: TableSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: DatasetStore::default(),
            next_cycle: AtomicU64::new(1),
            observer: None,
        }
    }

    /// Attach an observer notified after every cycle
    pub fn with_observer(mut self, observer: impl LoadObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Fetch all four tables concurrently
    pub async fn fetch_all(&self) -> RawTables {
        let (config, members, tasks, milestones) = tokio::join!(
            self.source.fetch(TableKind::Config),
            self.source.fetch(TableKind::Members),
            self.source.fetch(TableKind::Tasks),
            self.source.fetch(TableKind::Milestones),
        );
        RawTables {
            config,
            members,
            tasks,
            milestones,
        }
    }

    /// Run one full cycle and publish its snapshot
    ///
    /// When cycles overlap, the one started last wins; an older cycle that
    /// finishes later is returned to its caller but not published.
    pub async fn load(&self) -> LoadOutcome {
        let cycle = self.next_cycle.fetch_add(1, Ordering::SeqCst);
        let tables = self.fetch_all().await;
        let outcome = load_from_text(tables);

        let published = self.store.publish(
            cycle,
            Arc::clone(&outcome.dataset),
            outcome.report.clone(),
        );
        if !published {
            debug!(cycle, "newer load cycle already published, discarding result");
            return outcome;
        }

        if let Some(observer) = &self.observer {
            if !outcome.report.warnings.is_empty() {
                observer.on_warnings(&outcome.report.warnings);
            }
            if let Some(err) = &outcome.error {
                observer.on_fallback(err);
            }
            observer.on_loaded(&outcome.dataset);
        }

        outcome
    }

    /// The snapshot published by the latest cycle (the placeholder before any)
    pub fn current(&self) -> Arc<Dataset> {
        self.store.current()
    }

    /// Validation report of the published cycle
    pub fn last_report(&self) -> ValidationReport {
        self.store.report()
    }

    /// Published dataset and report, read together
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }
}

/// Run the pure part of a load cycle over already fetched text
///
/// Never fails: on any terminal problem the returned outcome carries the
/// fallback dataset and the error that caused it.
pub fn load_from_text(tables: RawTables) -> LoadOutcome {
    match build_dataset(tables) {
        Ok((dataset, report)) => {
            for warning in &report.warnings {
                warn!(%warning, "sheet validation warning");
            }
            info!(
                project = %dataset.project.name,
                members = dataset.team_members.len(),
                tasks = dataset.tasks.len(),
                milestones = dataset.milestones.len(),
                warnings = report.warnings.len(),
                "sheet loaded"
            );
            LoadOutcome {
                dataset: Arc::new(dataset),
                report,
                error: None,
            }
        }
        Err((err, report)) => {
            error!(error = %err, "sheet load failed, using fallback dataset");
            LoadOutcome {
                dataset: Arc::new(fallback::with_error(err.to_string())),
                report,
                error: Some(err),
            }
        }
    }
}

type BuildResult = Result<(Dataset, ValidationReport), (LoadError, ValidationReport)>;

fn build_dataset(tables: RawTables) -> BuildResult {
    let no_report = |err| (err, ValidationReport::default());

    let config = required_table(TableKind::Config, tables.config).map_err(no_report)?;
    let members = required_table(TableKind::Members, tables.members).map_err(no_report)?;
    let tasks = required_table(TableKind::Tasks, tables.tasks).map_err(no_report)?;
    let milestones = optional_table(tables.milestones);

    let project = normalize_config(&config_rows(&config));
    let team_members = normalize_members(&members.rows);
    let tasks = normalize_tasks(&tasks.rows);
    let milestone_list = match &milestones {
        Ok(table) => normalize_milestones(&table.rows),
        Err(_) => Vec::new(),
    };

    let mut report = validate(&project, &team_members, &tasks, &milestone_list);
    if let Err(reason) = &milestones {
        warn!(%reason, "milestones unavailable, continuing without them");
        report
            .warnings
            .push(format!("Milestones unavailable: {reason}"));
    }

    if report.is_fatal() {
        let err = LoadError::Validation {
            message: report.error_message(),
        };
        return Err((err, report));
    }

    Ok((
        Dataset::from_sheet(project, team_members, tasks, milestone_list),
        report,
    ))
}

fn required_table(table: TableKind, text: Result<String, SourceError>) -> Result<Table, LoadError> {
    let text = text.map_err(|source| LoadError::MissingTable { table, source })?;
    let parsed = parse_structure(table, &text)?;
    debug!(%table, rows = parsed.rows.len(), "parsed table");
    Ok(parsed)
}

fn optional_table(text: Result<String, SourceError>) -> Result<Table, String> {
    let table = TableKind::Milestones;
    let text = text.map_err(|err| err.to_string())?;
    let parsed = parse_structure(table, &text).map_err(|err| err.to_string())?;
    debug!(%table, rows = parsed.rows.len(), "parsed table");
    Ok(parsed)
}

/// Parse `text`, rejecting empty exports and HTML pages
fn parse_structure(table: TableKind, text: &str) -> Result<Table, LoadError> {
    if looks_like_html(text) {
        return Err(LoadError::MalformedInput { table });
    }
    parse_table_with_headers(text).ok_or(LoadError::MalformedInput { table })
}

/// Private or missing sheets answer export requests with an HTML page
fn looks_like_html(text: &str) -> bool {
    let head = text.trim_start_matches('\u{feff}').trim_start();
    head.starts_with('<')
}
