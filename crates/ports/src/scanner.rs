// crates/ports/src/scanner.rs
use std::path::Path;

use codestat_domain::{config::ScanSettings, model::FileRecord};
use codestat_shared_kernel::Result;

use crate::{cancel::CancellationToken, progress::ProgressSink};

/// Records gathered by one scan pass.
///
/// When `cancelled` is set, `files` holds whatever was collected before the
/// cancellation was observed.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub files: Vec<FileRecord>,
    pub cancelled: bool,
}

/// Port for walking a workspace root.
pub trait WorkspaceScanner: Send + Sync {
    /// # Errors
    ///
    /// Fails only for root-level problems (missing or unreadable root). Errors on
    /// individual files or subdirectories are logged and skipped.
    fn scan(
        &self,
        root: &Path,
        settings: &ScanSettings,
        cancel: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> Result<ScanOutput>;
}
