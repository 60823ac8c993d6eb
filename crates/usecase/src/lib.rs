//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and ports to implement the
//! user-facing actions:
//!
//! - [`history`]: Bounded snapshot history and its persistence wrapper
//! - [`orchestrator`]: Scan → aggregate → record pipeline
//! - [`commands`]: The actions a front end can trigger
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod dto;
pub mod history;
pub mod orchestrator;

pub use commands::Commands;
pub use dto::{AnalysisOutcome, AnalyzeRequest, StatusView};
pub use history::{HistoryLog, HistoryStore, MAX_HISTORY_SIZE};
pub use orchestrator::AnalyzeWorkspace;
