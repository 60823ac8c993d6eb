//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`scanner`]: Workspace traversal producing file records
//! - [`history`]: Persistence of the snapshot history
//! - [`settings`]: Workspace settings storage
//! - [`progress`]: Progress reporting for long-running operations
//! - [`cancel`]: Cooperative cancellation shared with the front end
//!
//! These ports let the use cases run without a real filesystem or terminal.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cancel;
pub mod history;
pub mod progress;
pub mod scanner;
pub mod settings;

pub use cancel::CancellationToken;
pub use history::HistoryRepository;
pub use progress::{NoProgress, ProgressSink};
pub use scanner::{ScanOutput, WorkspaceScanner};
pub use settings::SettingsRepository;
