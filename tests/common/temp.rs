use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A workspace directory plus a separate state directory, both removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    root: TempDir,
    state: TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { root: tempfile::tempdir().unwrap(), state: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn state_dir(&self) -> &Path {
        self.state.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[allow(dead_code)]
    pub fn history_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.state.path())
            .unwrap()
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect()
    }
}
