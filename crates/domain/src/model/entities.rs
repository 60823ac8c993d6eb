pub mod file_record;
pub mod snapshot;

pub use file_record::FileRecord;
pub use snapshot::{AggregationSnapshot, ExtensionBucket, ExtensionTable};
