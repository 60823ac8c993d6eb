use std::path::{Path, PathBuf};

use codestat_domain::config::WorkspaceSettings;
use codestat_ports::SettingsRepository;
use codestat_shared_kernel::{DomainError, InfrastructureError, Result};
use serde_json::Value;

use super::{file_reader::FileReader, file_writer::FileWriter};

pub const SETTINGS_FILE_NAME: &str = ".codestat.json";

/// `.codestat.json` in the workspace root.
///
/// A missing file means defaults. Saving rewrites only the known keys and
/// leaves any other keys in the file untouched.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_workspace(root: &Path) -> Self {
        Self::new(root.join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>> {
        FileReader::read_optional_string(&self.path)
            .map_err(|source| InfrastructureError::FileRead { path: self.path.clone(), source }.into())
    }

    fn invalid(&self, err: &serde_json::Error) -> DomainError {
        DomainError::InvalidConfiguration { reason: format!("{}: {err}", self.path.display()) }
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<WorkspaceSettings> {
        let Some(contents) = self.read()? else {
            return Ok(WorkspaceSettings::default());
        };
        if contents.trim().is_empty() {
            return Ok(WorkspaceSettings::default());
        }
        serde_json::from_str(&contents).map_err(|err| self.invalid(&err).into())
    }

    fn save(&self, settings: &WorkspaceSettings) -> Result<()> {
        let existing = match self.read()? {
            Some(contents) if !contents.trim().is_empty() => {
                serde_json::from_str::<Value>(&contents).map_err(|err| self.invalid(&err))?
            }
            _ => Value::Object(serde_json::Map::new()),
        };
        let Value::Object(fields) = serde_json::to_value(settings)? else {
            return Err(InfrastructureError::SerializationError {
                format: "JSON".to_string(),
                details: "settings did not serialize to an object".to_string(),
            }
            .into());
        };
        let document = match existing {
            Value::Object(mut existing) => {
                existing.extend(fields);
                Value::Object(existing)
            }
            _ => Value::Object(fields),
        };

        let mut data = serde_json::to_vec_pretty(&document)?;
        data.push(b'\n');
        FileWriter::atomic_write(&self.path, &data)
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source })?;
        Ok(())
    }
}
