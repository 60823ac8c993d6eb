use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::{
    model::{AggregationSnapshot, ExtensionTable, FileRecord},
    value_objects::{FileCount, FileSize, LineCount},
};

/// Reduces scanned file records into a snapshot with per-extension buckets.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates `files` into a snapshot stamped with the current time.
    pub fn aggregate(workspace_name: impl Into<String>, files: Vec<FileRecord>) -> AggregationSnapshot {
        Self::aggregate_at(workspace_name, files, Local::now())
    }

    /// Single pass over `files`; buckets appear in first-occurrence order.
    ///
    /// Files without an extension land in the `unknown` bucket. Pure and infallible:
    /// an empty input yields a zeroed snapshot with no buckets.
    pub fn aggregate_at(
        workspace_name: impl Into<String>,
        files: Vec<FileRecord>,
        captured_at: DateTime<Local>,
    ) -> AggregationSnapshot {
        let mut by_extension = ExtensionTable::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total_lines = LineCount::zero();
        let mut total_bytes = FileSize::zero();

        for file in &files {
            total_lines += file.line_count;
            total_bytes += file.byte_size;

            let key = file.extension.bucket_key();
            let slot = match index.get(key) {
                Some(&slot) => slot,
                None => {
                    let slot = by_extension.push(key.to_string());
                    index.insert(key.to_string(), slot);
                    slot
                }
            };
            by_extension.bucket_at_mut(slot).absorb(file);
        }

        AggregationSnapshot {
            captured_at,
            workspace_name: workspace_name.into(),
            total_files: FileCount::new(files.len()),
            total_lines,
            total_bytes,
            by_extension,
            files,
        }
    }
}
