//! Value objects shared with the kernel crate.

pub use codestat_shared_kernel::value_objects::{
    FileCount, FileExtension, FilePath, FileSize, LineCount, ModificationTime,
};
