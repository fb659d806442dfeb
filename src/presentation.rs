// src/presentation.rs
use std::fmt::{self, Write};

use line_report_domain::Report;

/// Renders `report` as plain text. Lines are joined with `'\n'` and the
/// result has no trailing newline.
pub fn format_report(report: &Report) -> String {
    RenderedReport(report).to_string()
}

/// `Display` adapter producing the same text as [`format_report`].
pub struct RenderedReport<'a>(pub &'a Report);

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write!(f, "Project: {}", report.project_name())?;
        write!(f, "\nLines: {}", report.line_count())?;
        f.write_str("\nFiltered:")?;
        for line in report.filtered_lines() {
            f.write_char('\n')?;
            write!(f, "- {line}")?;
        }
        Ok(())
    }
}
