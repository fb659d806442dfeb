use line_report_shared_kernel::{LineCount, MinLineLength};
use log::debug;
use serde::Serialize;

/// Outcome of one run, ready to be rendered.
///
/// `line_count` is the number of lines before filtering; `filtered_lines`
/// keeps the admitted lines in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    project_name: String,
    line_count: LineCount,
    filtered_lines: Vec<String>,
}

impl Report {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub const fn line_count(&self) -> LineCount {
        self.line_count
    }

    pub fn filtered_lines(&self) -> &[String] {
        &self.filtered_lines
    }
}

/// Counts `lines` and keeps those admitted by `min_line_length`.
pub fn build_report(
    project_name: impl Into<String>,
    lines: Vec<String>,
    min_line_length: MinLineLength,
) -> Report {
    let line_count = LineCount::new(lines.len());
    let filtered_lines: Vec<String> = lines
        .into_iter()
        .filter(|line| min_line_length.admits(line))
        .collect();

    debug!(
        "report built: {} of {} lines kept (min length {})",
        filtered_lines.len(),
        line_count,
        min_line_length.value()
    );

    Report {
        project_name: project_name.into(),
        line_count,
        filtered_lines,
    }
}
