use derive_builder::Builder;

use crate::{
    config::value_objects::{ExcludePattern, is_excluded},
    value_objects::FileExtension,
};

/// Files above this size are recorded without reading their content.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MiB

/// Resolved settings controlling one scan pass.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanSettings {
    #[builder(default)]
    pub exclude_patterns: Vec<ExcludePattern>,
    /// Empty means every extension is accepted.
    #[builder(default)]
    pub included_extensions: Vec<FileExtension>,
    #[builder(default = "MAX_FILE_SIZE")]
    pub size_ceiling: u64,
    #[builder(default)]
    pub respect_gitignore: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            included_extensions: Vec::new(),
            size_ceiling: MAX_FILE_SIZE,
            respect_gitignore: false,
        }
    }
}

impl ScanSettings {
    pub fn is_excluded(&self, name: &str) -> bool {
        is_excluded(name, &self.exclude_patterns)
    }

    pub fn accepts_extension(&self, ext: &FileExtension) -> bool {
        self.included_extensions.is_empty() || self.included_extensions.contains(ext)
    }

    pub fn exceeds_ceiling(&self, bytes: u64) -> bool {
        bytes > self.size_ceiling
    }
}

/// Ambient display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub show_in_status_bar: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { show_in_status_bar: true }
    }
}
