use codestat_domain::config::WorkspaceSettings;
use codestat_shared_kernel::Result;

/// Storage for the user-editable workspace settings.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<WorkspaceSettings>;
    fn save(&self, settings: &WorkspaceSettings) -> Result<()>;
}
