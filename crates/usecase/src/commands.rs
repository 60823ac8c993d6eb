use codestat_domain::model::AggregationSnapshot;
use codestat_ports::{
    CancellationToken, HistoryRepository, ProgressSink, SettingsRepository, WorkspaceScanner,
};
use codestat_shared_kernel::Result;

use crate::{
    dto::{AnalysisOutcome, AnalyzeRequest, StatusView},
    history::{HistoryLog, HistoryStore},
    orchestrator::AnalyzeWorkspace,
};

/// The user-triggerable actions for one workspace, wired to their ports.
pub struct Commands<'a> {
    scanner: &'a dyn WorkspaceScanner,
    settings: &'a dyn SettingsRepository,
    history: &'a dyn HistoryRepository,
}

impl<'a> Commands<'a> {
    pub fn new(
        scanner: &'a dyn WorkspaceScanner,
        settings: &'a dyn SettingsRepository,
        history: &'a dyn HistoryRepository,
    ) -> Self {
        Self { scanner, settings, history }
    }

    fn store(&self) -> HistoryStore<'a> {
        HistoryStore::new(self.history)
    }

    pub fn analyze_now(
        &self,
        request: &AnalyzeRequest,
        cancel: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> AnalysisOutcome {
        AnalyzeWorkspace::new(self.scanner, self.settings, self.store()).run(request, cancel, progress)
    }

    /// Latest snapshot, or `None` when the workspace was never analyzed.
    pub fn show_last_report(&self) -> Result<Option<AggregationSnapshot>> {
        self.store().latest()
    }

    /// Flips `showInStatusBar`, persists it, and returns the new value.
    pub fn toggle_status_bar(&self) -> Result<bool> {
        let mut settings = self.settings.load()?;
        settings.show_in_status_bar = !settings.show_in_status_bar;
        self.settings.save(&settings)?;
        log::info!("status display {}", if settings.show_in_status_bar { "enabled" } else { "disabled" });
        Ok(settings.show_in_status_bar)
    }

    pub fn status(&self) -> Result<StatusView> {
        let display = self.settings.load()?.display_settings();
        let latest = if display.show_in_status_bar { self.store().latest()? } else { None };
        Ok(StatusView { display, latest })
    }

    pub fn history(&self) -> Result<HistoryLog> {
        self.store().load()
    }

    pub fn clear_history(&self) -> Result<()> {
        self.store().clear()
    }
}

#[cfg(test)]
mod tests {
    use std::{path::Path, sync::Mutex};

    use codestat_domain::{config::{ScanSettings, WorkspaceSettings}, model::FileRecord};
    use codestat_domain::value_objects::{FileSize, LineCount};
    use codestat_ports::{NoProgress, ScanOutput};

    use super::*;

    struct OneFileScanner;

    impl WorkspaceScanner for OneFileScanner {
        fn scan(
            &self,
            _root: &Path,
            _settings: &ScanSettings,
            _cancel: &CancellationToken,
            _progress: &dyn ProgressSink,
        ) -> Result<ScanOutput> {
            let record = FileRecord::new("main.rs", "rs", LineCount::new(3), FileSize::new(30), None);
            Ok(ScanOutput { files: vec![record], cancelled: false })
        }
    }

    #[derive(Default)]
    struct MemorySettings {
        stored: Mutex<WorkspaceSettings>,
    }

    impl SettingsRepository for MemorySettings {
        fn load(&self) -> Result<WorkspaceSettings> {
            Ok(self.stored.lock().unwrap().clone())
        }

        fn save(&self, settings: &WorkspaceSettings) -> Result<()> {
            *self.stored.lock().unwrap() = settings.clone();
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

    #[test]
    fn show_last_report_before_any_analysis_is_none() {
        let (settings, history) = (MemorySettings::default(), MemoryHistory::default());
        let commands = Commands::new(&OneFileScanner, &settings, &history);
        assert!(commands.show_last_report().unwrap().is_none());
        assert!(commands.status().unwrap().latest.is_none());
    }

    #[test]
    fn analyze_then_report_and_status() {
        let (settings, history) = (MemorySettings::default(), MemoryHistory::default());
        let commands = Commands::new(&OneFileScanner, &settings, &history);

        let outcome = commands.analyze_now(&AnalyzeRequest::new("/ws", "ws"), &CancellationToken::new(), &NoProgress);
        assert!(outcome.is_completed());

        let last = commands.show_last_report().unwrap().unwrap();
        assert_eq!(last.total_lines, 3);
        let status = commands.status().unwrap();
        assert!(status.display.show_in_status_bar);
        assert_eq!(status.latest.unwrap().total_files, 1);
    }

    #[test]
    fn toggle_twice_restores_original_value() {
        let (settings, history) = (MemorySettings::default(), MemoryHistory::default());
        let commands = Commands::new(&OneFileScanner, &settings, &history);

        assert!(!commands.toggle_status_bar().unwrap());
        assert!(!settings.stored.lock().unwrap().show_in_status_bar);
        assert!(commands.status().unwrap().latest.is_none());
        assert!(commands.toggle_status_bar().unwrap());
        assert!(settings.stored.lock().unwrap().show_in_status_bar);
    }

    #[test]
    fn clear_history_empties_the_log() {
        let (settings, history) = (MemorySettings::default(), MemoryHistory::default());
        let commands = Commands::new(&OneFileScanner, &settings, &history);
        let request = AnalyzeRequest::new("/ws", "ws");
        for _ in 0..3 {
            commands.analyze_now(&request, &CancellationToken::new(), &NoProgress);
        }
        assert_eq!(commands.history().unwrap().len(), 3);

        commands.clear_history().unwrap();
        assert!(commands.history().unwrap().is_empty());
    }
}
