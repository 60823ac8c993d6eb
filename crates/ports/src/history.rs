use codestat_domain::model::AggregationSnapshot;
use codestat_shared_kernel::Result;

/// Workspace-scoped storage for the snapshot history, most recent first.
pub trait HistoryRepository: Send + Sync {
    /// Absent or malformed state loads as an empty history.
    fn load(&self) -> Result<Vec<AggregationSnapshot>>;

    /// Replaces the stored history in one step.
    fn save(&self, snapshots: &[AggregationSnapshot]) -> Result<()>;
}
