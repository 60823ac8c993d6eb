pub mod aggregates;
pub mod value_objects;

pub use aggregates::{DisplaySettings, MAX_FILE_SIZE, ScanSettings, ScanSettingsBuilder, WorkspaceSettings};
pub use value_objects::{ExcludePattern, is_excluded};
