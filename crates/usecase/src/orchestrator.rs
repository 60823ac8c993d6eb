use codestat_domain::{analytics::Aggregator, config::ScanSettings};
use codestat_ports::{CancellationToken, ProgressSink, SettingsRepository, WorkspaceScanner};
use codestat_shared_kernel::{ApplicationError, CodeStatError, Result};

use crate::{
    dto::{AnalysisOutcome, AnalyzeRequest},
    history::HistoryStore,
};

/// Scan → aggregate → record pipeline for one workspace.
pub struct AnalyzeWorkspace<'a> {
    scanner: &'a dyn WorkspaceScanner,
    settings: &'a dyn SettingsRepository,
    history: HistoryStore<'a>,
}

impl<'a> AnalyzeWorkspace<'a> {
    pub fn new(
        scanner: &'a dyn WorkspaceScanner,
        settings: &'a dyn SettingsRepository,
        history: HistoryStore<'a>,
    ) -> Self {
        Self { scanner, settings, history }
    }

    /// Runs the pipeline. A cancelled or failed run records nothing.
    pub fn run(
        &self,
        request: &AnalyzeRequest,
        cancel: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> AnalysisOutcome {
        match self.try_run(request, cancel, progress) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("analysis of {} failed: {err}", request.root.display());
                AnalysisOutcome::Failed(err)
            }
        }
    }

    fn try_run(
        &self,
        request: &AnalyzeRequest,
        cancel: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisOutcome> {
        let settings = self.resolve_settings(request)?;
        log::debug!(
            "scanning {} ({} exclude patterns, {} extensions)",
            request.root.display(),
            settings.exclude_patterns.len(),
            settings.included_extensions.len()
        );

        progress.on_progress("Scanning files...")?;
        let output = self
            .scanner
            .scan(&request.root, &settings, cancel, progress)
            .map_err(|err| scan_failure(request, err))?;

        if output.cancelled || cancel.is_cancelled() {
            log::info!("analysis cancelled after {} files", output.files.len());
            return Ok(AnalysisOutcome::Cancelled { files_scanned: output.files.len() });
        }

        progress.on_progress("Computing statistics...")?;
        let snapshot = Aggregator::aggregate(request.workspace_name.clone(), output.files);

        self.history.record(snapshot.clone()).map_err(|err| {
            CodeStatError::from(ApplicationError::HistoryUnavailable {
                reason: "could not record snapshot".to_string(),
                source: Some(Box::new(err)),
            })
        })?;

        progress.on_complete(&snapshot)?;
        log::info!(
            "analysis complete: {} files, {} lines",
            snapshot.total_files,
            snapshot.total_lines
        );
        Ok(AnalysisOutcome::Completed(snapshot))
    }

    fn resolve_settings(&self, request: &AnalyzeRequest) -> Result<ScanSettings> {
        let stored = self.settings.load()?;
        let settings = stored
            .with_overrides(&request.extra_excludes, &request.extra_extensions)
            .scan_settings()?;
        Ok(settings)
    }
}

fn scan_failure(request: &AnalyzeRequest, err: CodeStatError) -> CodeStatError {
    match err {
        CodeStatError::Application(ApplicationError::NoWorkspace { .. }) => err,
        other => ApplicationError::ScanFailed {
            root: request.root.clone(),
            reason: other.to_string(),
            source: Some(Box::new(other)),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::{Path, PathBuf},
        sync::Mutex,
    };

    use codestat_domain::{
        config::WorkspaceSettings,
        model::{AggregationSnapshot, FileRecord},
        value_objects::{FileSize, LineCount},
    };
    use codestat_ports::{HistoryRepository, NoProgress, ScanOutput};
    use codestat_shared_kernel::InfrastructureError;

    use super::*;

    struct StubScanner {
        files: Vec<FileRecord>,
        cancel_midway: bool,
        fail: bool,
        seen_settings: Mutex<Option<ScanSettings>>,
    }

    impl StubScanner {
        fn with_files(paths: &[(&str, usize)]) -> Self {
            let files = paths
                .iter()
                .map(|(path, lines)| {
                    let ext = Path::new(path).extension().and_then(|e| e.to_str()).unwrap_or("");
                    FileRecord::new(*path, ext, LineCount::new(*lines), FileSize::new(10), None)
                })
                .collect();
            Self { files, cancel_midway: false, fail: false, seen_settings: Mutex::new(None) }
        }
    }

    impl WorkspaceScanner for StubScanner {
        fn scan(
            &self,
            root: &Path,
            settings: &ScanSettings,
            cancel: &CancellationToken,
            _progress: &dyn ProgressSink,
        ) -> Result<ScanOutput> {
            *self.seen_settings.lock().unwrap() = Some(settings.clone());
            if self.fail {
                return Err(InfrastructureError::FileSystemOperation {
                    operation: "read_dir".to_string(),
                    path: root.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                }
                .into());
            }
            if self.cancel_midway {
                cancel.cancel();
                return Ok(ScanOutput { files: self.files[..1].to_vec(), cancelled: true });
            }
            Ok(ScanOutput { files: self.files.clone(), cancelled: false })
        }
    }

    #[derive(Default)]
    struct StubSettings {
        stored: WorkspaceSettings,
    }

    impl SettingsRepository for StubSettings {
        fn load(&self) -> Result<WorkspaceSettings> {
            Ok(self.stored.clone())
        }

        fn save(&self, _settings: &WorkspaceSettings) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryHistory {
        saved: Mutex<Vec<AggregationSnapshot>>,
    }

    impl HistoryRepository for MemoryHistory {
        fn load(&self) -> Result<Vec<AggregationSnapshot>> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save(&self, snapshots: &[AggregationSnapshot]) -> Result<()> {
            *self.saved.lock().unwrap() = snapshots.to_vec();
            Ok(())
        }
    }

    fn request() -> AnalyzeRequest {
        AnalyzeRequest::new(PathBuf::from("/ws"), "ws")
    }

    #[test]
    fn completed_run_records_snapshot() {
        let scanner = StubScanner::with_files(&[("a.rs", 10), ("b.rs", 5), ("README", 2)]);
        let settings = StubSettings::default();
        let history = MemoryHistory::default();
        let usecase = AnalyzeWorkspace::new(&scanner, &settings, HistoryStore::new(&history));

        let outcome = usecase.run(&request(), &CancellationToken::new(), &NoProgress);

        let snapshot = outcome.snapshot().expect("completed");
        assert_eq!(snapshot.total_files, 3);
        assert_eq!(snapshot.total_lines, 17);
        assert_eq!(snapshot.workspace_name, "ws");
        assert!(snapshot.by_extension.get("unknown").is_some());
        assert_eq!(history.saved.lock().unwrap().len(), 1);
    }

    #[test]
    fn cancelled_run_records_nothing() {
        let mut scanner = StubScanner::with_files(&[("a.rs", 10), ("b.rs", 5)]);
        scanner.cancel_midway = true;
        let settings = StubSettings::default();
        let history = MemoryHistory::default();
        let usecase = AnalyzeWorkspace::new(&scanner, &settings, HistoryStore::new(&history));

        let outcome = usecase.run(&request(), &CancellationToken::new(), &NoProgress);

        assert!(matches!(outcome, AnalysisOutcome::Cancelled { files_scanned: 1 }));
        assert!(history.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn scan_error_is_reported_as_failure() {
        let mut scanner = StubScanner::with_files(&[("a.rs", 1)]);
        scanner.fail = true;
        let settings = StubSettings::default();
        let history = MemoryHistory::default();
        let usecase = AnalyzeWorkspace::new(&scanner, &settings, HistoryStore::new(&history));

        let outcome = usecase.run(&request(), &CancellationToken::new(), &NoProgress);

        match outcome {
            AnalysisOutcome::Failed(CodeStatError::Application(ApplicationError::ScanFailed { root, .. })) => {
                assert_eq!(root, PathBuf::from("/ws"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(history.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn request_overrides_reach_the_scanner() {
        let scanner = StubScanner::with_files(&[("a.rs", 1)]);
        let settings = StubSettings {
            stored: WorkspaceSettings { exclude_patterns: vec!["target".into()], ..Default::default() },
        };
        let history = MemoryHistory::default();
        let usecase = AnalyzeWorkspace::new(&scanner, &settings, HistoryStore::new(&history));

        let mut req = request();
        req.extra_excludes = vec!["*.log".into()];
        req.extra_extensions = vec![".RS".into()];
        assert!(usecase.run(&req, &CancellationToken::new(), &NoProgress).is_completed());

        let seen = scanner.seen_settings.lock().unwrap().clone().unwrap();
        assert!(seen.is_excluded("target"));
        assert!(seen.is_excluded("debug.log"));
        assert_eq!(seen.included_extensions.len(), 1);
    }

    #[test]
    fn invalid_stored_pattern_fails_before_scanning() {
        let scanner = StubScanner::with_files(&[("a.rs", 1)]);
        let settings = StubSettings {
            stored: WorkspaceSettings { exclude_patterns: vec![String::new()], ..Default::default() },
        };
        let history = MemoryHistory::default();
        let usecase = AnalyzeWorkspace::new(&scanner, &settings, HistoryStore::new(&history));

        let outcome = usecase.run(&request(), &CancellationToken::new(), &NoProgress);

        assert!(matches!(outcome, AnalysisOutcome::Failed(CodeStatError::Domain(_))));
        assert!(scanner.seen_settings.lock().unwrap().is_none());
    }
}
