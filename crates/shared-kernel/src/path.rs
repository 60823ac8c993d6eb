// crates/shared-kernel/src/path.rs
use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Display label for a workspace root: its final directory name.
///
/// `.` and `..` are resolved against the current directory first; a filesystem
/// root yields its own display form.
pub fn workspace_label(root: &Path) -> String {
    let absolute = logical_absolute(root);
    let normalised = absolute.canonicalize().unwrap_or(absolute);
    normalised
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalised.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        let path = std::env::temp_dir();
        assert_eq!(logical_absolute(&path), path);
    }

    #[test]
    fn label_is_last_component() {
        let dir = std::env::temp_dir().join("codestat_label_probe");
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(workspace_label(&dir), "codestat_label_probe");
        let _ = std::fs::remove_dir(&dir);
    }
}
