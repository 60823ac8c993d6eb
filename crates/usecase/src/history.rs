use codestat_domain::model::AggregationSnapshot;
use codestat_ports::HistoryRepository;
use codestat_shared_kernel::Result;

/// Maximum number of snapshots retained per workspace.
pub const MAX_HISTORY_SIZE: usize = 10;

/// Most-recent-first list of snapshots, capped at [`MAX_HISTORY_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<AggregationSnapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from persisted entries, dropping anything past the cap.
    pub fn from_entries(mut entries: Vec<AggregationSnapshot>) -> Self {
        entries.truncate(MAX_HISTORY_SIZE);
        Self { entries }
    }

    /// Prepends `snapshot`, evicting the oldest entries beyond the cap.
    pub fn record(&mut self, snapshot: AggregationSnapshot) {
        self.entries.insert(0, snapshot);
        self.entries.truncate(MAX_HISTORY_SIZE);
    }

    pub fn latest(&self) -> Option<&AggregationSnapshot> {
        self.entries.first()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[AggregationSnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<AggregationSnapshot> {
        self.entries
    }
}

/// Loads, mutates and saves the persisted log; nothing is cached in between.
pub struct HistoryStore<'a> {
    repository: &'a dyn HistoryRepository,
}

impl<'a> HistoryStore<'a> {
    pub fn new(repository: &'a dyn HistoryRepository) -> Self {
        Self { repository }
    }

    pub fn load(&self) -> Result<HistoryLog> {
        Ok(HistoryLog::from_entries(self.repository.load()?))
    }

    pub fn record(&self, snapshot: AggregationSnapshot) -> Result<()> {
        let mut log = self.load()?;
        log.record(snapshot);
        self.repository.save(log.entries())
    }

    pub fn latest(&self) -> Result<Option<AggregationSnapshot>> {
        Ok(self.load()?.into_entries().into_iter().next())
    }

    pub fn clear(&self) -> Result<()> {
        self.repository.save(&[])
    }
}
