use std::path::PathBuf;

use codestat_domain::{config::DisplaySettings, model::AggregationSnapshot};
use codestat_shared_kernel::CodeStatError;

/// Parameters of one "analyze now" invocation.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub root: PathBuf,
    pub workspace_name: String,
    /// Exclude patterns appended to the stored settings for this run only.
    pub extra_excludes: Vec<String>,
    /// Extensions appended to the stored allowlist for this run only.
    pub extra_extensions: Vec<String>,
}

impl AnalyzeRequest {
    pub fn new(root: impl Into<PathBuf>, workspace_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            workspace_name: workspace_name.into(),
            extra_excludes: Vec::new(),
            extra_extensions: Vec::new(),
        }
    }
}

/// Result of an analysis: completed, cancelled, or failed.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Completed(AggregationSnapshot),
    /// Nothing was recorded; `files_scanned` counts the records gathered before the stop.
    Cancelled { files_scanned: usize },
    Failed(CodeStatError),
}

impl AnalysisOutcome {
    pub fn snapshot(&self) -> Option<&AggregationSnapshot> {
        match self {
            Self::Completed(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// What the ambient status display should show.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub display: DisplaySettings,
    pub latest: Option<AggregationSnapshot>,
}
