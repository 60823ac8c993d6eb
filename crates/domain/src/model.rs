pub mod entities;

pub use entities::{AggregationSnapshot, ExtensionBucket, ExtensionTable, FileRecord};
