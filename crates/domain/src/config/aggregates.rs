pub mod scan_settings;
pub mod workspace_settings;

pub use scan_settings::{DisplaySettings, MAX_FILE_SIZE, ScanSettings, ScanSettingsBuilder};
pub use workspace_settings::WorkspaceSettings;
