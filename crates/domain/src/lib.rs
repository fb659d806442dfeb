//! # Domain
//!
//! Pure pipeline logic with no I/O:
//!
//! - [`config`]: the fixed application configuration
//! - [`lines`]: splitting raw text into lines, and the fallback sequence
//! - [`report`]: counting and filtering lines into a [`Report`]

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod lines;
pub mod report;

pub use config::{AppConfig, AppConfigBuilder};
pub use lines::{FALLBACK_LINES, fallback_lines, split_lines};
pub use report::{Report, build_report};
