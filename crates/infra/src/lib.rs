// crates/infra/src/lib.rs
//! # Infrastructure
//!
//! Filesystem-backed implementations of the ports: the workspace walker,
//! line measurement, and JSON persistence for history and settings.

#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;

pub use filesystem::WorkspaceWalker;
pub use persistence::{JsonHistoryRepository, JsonSettingsRepository, resolve_state_dir};
