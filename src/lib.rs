// src/lib.rs
//! # codestat
//!
//! Workspace code statistics: non-blank line counts aggregated by file
//! extension, a bounded per-workspace history, and status/report rendering.
//!
//! The binary is a thin shell over [`app::run`]; the layers live in the
//! `codestat_*` workspace crates.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod logging;
pub mod presentation;
pub mod progress;

pub use codestat_domain as domain;
pub use codestat_shared_kernel as shared_kernel;
pub use codestat_usecase as usecase;
