pub mod aggregate;
pub mod sort;

pub use aggregate::Aggregator;
pub use sort::{ExtensionRow, LineShare, extension_rows};
