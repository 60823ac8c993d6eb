// crates/domain/src/model/entities/file_record.rs
use serde::{Deserialize, Serialize};

use crate::value_objects::{FileExtension, FilePath, FileSize, LineCount, ModificationTime};

/// One scanned file.
///
/// `line_count` is only measured for files at or below the size ceiling;
/// larger files carry zero lines by policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: FilePath,
    pub extension: FileExtension,
    pub line_count: LineCount,
    pub byte_size: FileSize,
    #[serde(default)]
    pub modified_at: Option<ModificationTime>,
}

impl FileRecord {
    pub fn new(
        path: impl Into<FilePath>,
        extension: impl Into<FileExtension>,
        line_count: LineCount,
        byte_size: FileSize,
        modified_at: Option<ModificationTime>,
    ) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
            line_count,
            byte_size,
            modified_at,
        }
    }

    /// 上限を超えたファイル: 行数は読まずに 0 とする
    pub fn oversized(
        path: impl Into<FilePath>,
        extension: impl Into<FileExtension>,
        byte_size: FileSize,
        modified_at: Option<ModificationTime>,
    ) -> Self {
        Self::new(path, extension, LineCount::zero(), byte_size, modified_at)
    }
}
