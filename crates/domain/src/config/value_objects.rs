pub mod exclude_pattern;

pub use exclude_pattern::{ExcludePattern, is_excluded};
