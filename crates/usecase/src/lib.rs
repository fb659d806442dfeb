//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`line_reader`]: reading the input through a [`TextSource`] with the
//!   fallback applied on failure
//! - [`orchestrator`]: read lines, then build the report
//!
//! Use cases depend on domain and ports, but not on infrastructure.
//!
//! [`TextSource`]: line_report_ports::text_source::TextSource

#![allow(clippy::multiple_crate_versions)]

pub mod line_reader;
pub mod orchestrator;

pub use line_reader::ReadLines;
pub use orchestrator::GenerateReport;
