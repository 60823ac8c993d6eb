use serde::{Deserialize, Serialize};

use codestat_shared_kernel::DomainResult;

use crate::{
    config::{
        aggregates::scan_settings::{DisplaySettings, MAX_FILE_SIZE, ScanSettings},
        value_objects::ExcludePattern,
    },
    value_objects::FileExtension,
};

/// User-editable workspace settings as stored in `.codestat.json`.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceSettings {
    pub exclude_patterns: Vec<String>,
    pub included_file_types: Vec<String>,
    pub show_in_status_bar: bool,
    pub respect_gitignore: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            included_file_types: Vec::new(),
            show_in_status_bar: true,
            respect_gitignore: false,
        }
    }
}

impl WorkspaceSettings {
    /// Appends one-off CLI additions to the stored lists.
    #[must_use]
    pub fn with_overrides(mut self, exclude: &[String], ext: &[String]) -> Self {
        self.exclude_patterns.extend(exclude.iter().cloned());
        self.included_file_types.extend(ext.iter().cloned());
        self
    }

    /// Compiles patterns and normalises extensions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPattern` for the first pattern that fails to compile.
    pub fn scan_settings(&self) -> DomainResult<ScanSettings> {
        let exclude_patterns = self
            .exclude_patterns
            .iter()
            .map(|p| ExcludePattern::new(p))
            .collect::<DomainResult<Vec<_>>>()?;

        let mut included_extensions: Vec<FileExtension> = Vec::new();
        for raw in &self.included_file_types {
            let ext = FileExtension::new(raw);
            if !ext.is_empty() && !included_extensions.contains(&ext) {
                included_extensions.push(ext);
            }
        }

        Ok(ScanSettings {
            exclude_patterns,
            included_extensions,
            size_ceiling: MAX_FILE_SIZE,
            respect_gitignore: self.respect_gitignore,
        })
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings { show_in_status_bar: self.show_in_status_bar }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let settings: WorkspaceSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, WorkspaceSettings::default());
        assert!(settings.display_settings().show_in_status_bar);
    }

    #[test]
    fn camel_case_keys_are_read() {
        let raw = r#"{"excludePatterns":["node_modules","*.log"],"includedFileTypes":[".TS","js"],"showInStatusBar":false}"#;
        let settings: WorkspaceSettings = serde_json::from_str(raw).unwrap();
        let scan = settings.scan_settings().unwrap();
        assert_eq!(scan.exclude_patterns.len(), 2);
        assert_eq!(
            scan.included_extensions,
            vec![FileExtension::new("ts"), FileExtension::new("js")]
        );
        assert!(!settings.display_settings().show_in_status_bar);
    }

    #[test]
    fn overrides_extend_lists() {
        let settings = WorkspaceSettings::default()
            .with_overrides(&["target".to_string()], &["rs".to_string(), "rs".to_string()]);
        let scan = settings.scan_settings().unwrap();
        assert!(scan.is_excluded("target"));
        assert_eq!(scan.included_extensions, vec![FileExtension::new("rs")]);
    }

    #[test]
    fn empty_pattern_is_a_configuration_error() {
        let settings = WorkspaceSettings { exclude_patterns: vec![String::new()], ..Default::default() };
        assert!(settings.scan_settings().is_err());
    }
}
