use std::path::{Path, PathBuf};

use codestat_domain::model::AggregationSnapshot;
use codestat_ports::HistoryRepository;
use codestat_shared_kernel::{InfrastructureError, Result, path::logical_absolute};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use super::{file_reader::FileReader, file_writer::FileWriter};

pub const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    snapshots: Vec<AggregationSnapshot>,
}

/// One JSON file per workspace under the state directory.
#[derive(Debug, Clone)]
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// History file for `root` inside `state_dir`.
    pub fn for_workspace(state_dir: &Path, root: &Path) -> Self {
        Self::new(state_dir.join(history_file_name(root)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self) -> Result<Vec<AggregationSnapshot>> {
        let contents = FileReader::read_optional_string(&self.path)
            .map_err(|source| InfrastructureError::FileRead { path: self.path.clone(), source })?;
        let Some(contents) = contents.filter(|c| !c.trim().is_empty()) else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<HistoryFile>(&contents) {
            Ok(file) if file.version == HISTORY_VERSION => Ok(file.snapshots),
            Ok(file) => {
                log::warn!(
                    "history {} has version {} (expected {}); starting empty",
                    self.path.display(),
                    file.version,
                    HISTORY_VERSION
                );
                Ok(Vec::new())
            }
            Err(err) => {
                log::warn!("failed to parse history {}: {err}; starting empty", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, snapshots: &[AggregationSnapshot]) -> Result<()> {
        let file = HistoryFile { version: HISTORY_VERSION, snapshots: snapshots.to_vec() };
        let data = serde_json::to_vec_pretty(&file)?;
        let lock_path = self.lock_path();
        FileWriter::with_exclusive_lock(&lock_path, || FileWriter::atomic_write(&self.path, &data))
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source })?;
        log::debug!("saved {} snapshots to {}", snapshots.len(), self.path.display());
        Ok(())
    }
}

fn history_file_name(root: &Path) -> String {
    format!("codestat-history-{:016x}.json", workspace_hash(root))
}

// xxh3 is stable across processes, unlike DefaultHasher.
fn workspace_hash(root: &Path) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(logical_absolute(root).to_string_lossy().as_bytes());
    hasher.digest()
}
