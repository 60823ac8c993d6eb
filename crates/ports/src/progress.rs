use codestat_domain::{model::AggregationSnapshot, value_objects::FilePath};
use codestat_shared_kernel::Result;

/// Receives scan progress; implementations must be cheap since `on_file` runs per file.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, message: &str) -> Result<()>;
    fn on_file(&self, path: &FilePath) -> Result<()>;
    fn on_complete(&self, snapshot: &AggregationSnapshot) -> Result<()>;
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn on_file(&self, _path: &FilePath) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _snapshot: &AggregationSnapshot) -> Result<()> {
        Ok(())
    }
}
