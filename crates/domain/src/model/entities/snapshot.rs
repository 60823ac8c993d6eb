// crates/domain/src/model/entities/snapshot.rs
use std::fmt;

use chrono::{DateTime, Local};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    model::FileRecord,
    value_objects::{FileCount, FileSize, LineCount},
};

/// Aggregated counters for every file sharing one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionBucket {
    pub file_count: FileCount,
    pub line_count: LineCount,
    pub byte_size: FileSize,
}

impl ExtensionBucket {
    pub fn absorb(&mut self, record: &FileRecord) {
        self.file_count += 1;
        self.line_count += record.line_count;
        self.byte_size += record.byte_size;
    }
}

/// Extension buckets kept in first-insertion order.
///
/// Serialized as a JSON object whose key order follows insertion, so the
/// order survives a save/load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTable {
    entries: Vec<(String, ExtensionBucket)>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ExtensionBucket> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, bucket)| bucket)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionBucket)> {
        self.entries.iter().map(|(k, bucket)| (k.as_str(), bucket))
    }

    /// Appends a new bucket and returns its position.
    ///
    /// Callers are responsible for key uniqueness; the aggregator keeps an index.
    pub(crate) fn push(&mut self, key: String) -> usize {
        self.entries.push((key, ExtensionBucket::default()));
        self.entries.len() - 1
    }

    pub(crate) fn bucket_at_mut(&mut self, index: usize) -> &mut ExtensionBucket {
        &mut self.entries[index].1
    }
}

impl Serialize for ExtensionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, bucket) in &self.entries {
            map.serialize_entry(key, bucket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtensionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ExtensionTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of extension buckets")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, ExtensionBucket)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, bucket)) = access.next_entry::<String, ExtensionBucket>()? {
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(de::Error::custom(format!("duplicate extension key '{key}'")));
                    }
                    entries.push((key, bucket));
                }
                Ok(ExtensionTable { entries })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// One completed scan, immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSnapshot {
    pub captured_at: DateTime<Local>,
    pub workspace_name: String,
    pub total_files: FileCount,
    pub total_lines: LineCount,
    pub total_bytes: FileSize,
    pub by_extension: ExtensionTable,
    pub files: Vec<FileRecord>,
}

impl AggregationSnapshot {
    /// Number of distinct extension buckets.
    pub fn extension_count(&self) -> usize {
        self.by_extension.len()
    }

    /// Checks the totals against the contained records.
    pub fn is_consistent(&self) -> bool {
        let lines: LineCount = self.files.iter().map(|f| f.line_count).sum();
        let bytes: FileSize = self.files.iter().map(|f| f.byte_size).sum();
        let bucket_lines: LineCount = self.by_extension.iter().map(|(_, b)| b.line_count).sum();
        let bucket_files: FileCount = self.by_extension.iter().map(|(_, b)| b.file_count).sum();

        self.total_files == self.files.len()
            && self.total_lines == lines
            && self.total_bytes == bytes
            && bucket_lines == self.total_lines
            && bucket_files == self.total_files
    }
}
