// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod logging;
pub mod presentation;

use line_report_domain::AppConfig;
use line_report_infra::FsTextSource;
use line_report_usecase::GenerateReport;

/// Runs the whole pipeline against the local file system and returns the
/// rendered report, without a trailing newline.
pub fn render(config: &AppConfig) -> String {
    let source = FsTextSource::new();
    let report = GenerateReport::new(&source).run(config);
    presentation::format_report(&report)
}
