// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use chrono::{DateTime, Local};
use codestat_domain::{
    config::{ExcludePattern, ScanSettings, is_excluded},
    model::FileRecord,
    value_objects::{FileExtension, FilePath, FileSize, LineCount, ModificationTime},
};
use codestat_ports::{CancellationToken, ProgressSink, ScanOutput, WorkspaceScanner};
use codestat_shared_kernel::{ApplicationError, InfrastructureError, Result};
use ignore::{DirEntry, WalkBuilder};

use crate::measurement::measure_file;

/// Filesystem adapter implementing the `WorkspaceScanner` port.
///
/// Traversal is sequential and depth-first with entries sorted by name,
/// so two scans of an unchanged tree produce records in the same order.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkspaceWalker;

impl WorkspaceWalker {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceScanner for WorkspaceWalker {
    fn scan(
        &self,
        root: &Path,
        settings: &ScanSettings,
        cancel: &CancellationToken,
        progress: &dyn ProgressSink,
    ) -> Result<ScanOutput> {
        ensure_listable_root(root)?;

        let mut output = ScanOutput::default();
        for result in build_walker(root, settings).build() {
            if cancel.is_cancelled() {
                output.cancelled = true;
                break;
            }
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    // unreadable subdirectories land here; the walker skips their subtree
                    log::warn!("skipping entry: {err}");
                    continue;
                }
            };
            if !is_regular_file(&entry) {
                continue;
            }
            if let Some(record) = record_for(root, &entry, settings) {
                progress.on_file(&record.path)?;
                output.files.push(record);
            }
        }

        log::debug!(
            "walked {}: {} files{}",
            root.display(),
            output.files.len(),
            if output.cancelled { " (cancelled)" } else { "" }
        );
        Ok(output)
    }
}

fn ensure_listable_root(root: &Path) -> Result<()> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ApplicationError::NoWorkspace { path: root.to_path_buf() }.into());
        }
        Err(source) => {
            return Err(InfrastructureError::FileSystemOperation {
                operation: "stat".to_string(),
                path: root.to_path_buf(),
                source,
            }
            .into());
        }
    };
    if !metadata.is_dir() {
        return Err(ApplicationError::NoWorkspace { path: root.to_path_buf() }.into());
    }
    fs::read_dir(root).map_err(|source| InfrastructureError::FileSystemOperation {
        operation: "read_dir".to_string(),
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn build_walker(root: &Path, settings: &ScanSettings) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    // Hidden files are counted; only explicit patterns and (optionally) ignore files prune.
    builder.standard_filters(false);
    builder.follow_links(false);
    if settings.respect_gitignore {
        builder.git_ignore(true);
        builder.ignore(true);
        builder.require_git(false);
    }
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let patterns: Vec<ExcludePattern> = settings.exclude_patterns.clone();
    builder.filter_entry(move |entry| entry.depth() == 0 || !is_excluded(&entry_name(entry), &patterns));
    builder
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

// Symlinks are never followed, so a link to a file is not a regular file here.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn record_for(root: &Path, entry: &DirEntry, settings: &ScanSettings) -> Option<FileRecord> {
    let path = entry.path();
    let extension = FileExtension::from_path(path);
    if !settings.accepts_extension(&extension) {
        return None;
    }

    let metadata = match entry.metadata() {
        Ok(metadata) => metadata,
        Err(err) => {
            log::warn!("cannot stat {}: {err}", path.display());
            return None;
        }
    };
    let size = FileSize::new(metadata.len());
    let modified = metadata.modified().ok().map(|t| ModificationTime::new(DateTime::<Local>::from(t)));
    let relative = FilePath::relative_to(root, path);

    if settings.exceeds_ceiling(size.bytes()) {
        log::warn!(
            "{} is {} (over the {} limit); recorded with 0 lines",
            relative,
            size.to_human(),
            FileSize::new(settings.size_ceiling).to_human()
        );
        return Some(FileRecord::oversized(relative, extension, size, modified));
    }

    match measure_file(path) {
        Ok(lines) => Some(FileRecord::new(relative, extension, LineCount::new(lines), size, modified)),
        Err(err) => {
            log::warn!("skipping {}: {err}", path.display());
            None
        }
    }
}
