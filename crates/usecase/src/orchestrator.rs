use line_report_domain::{AppConfig, Report, build_report};
use line_report_ports::text_source::TextSource;

use crate::line_reader::ReadLines;

/// Reads the configured input and turns it into a [`Report`].
pub struct GenerateReport<'a> {
    source: &'a dyn TextSource,
}

impl<'a> GenerateReport<'a> {
    pub fn new(source: &'a dyn TextSource) -> Self {
        Self { source }
    }

    pub fn run(&self, config: &AppConfig) -> Report {
        let lines = ReadLines::new(self.source).run(config.input_path());
        build_report(config.project_name(), lines, config.min_line_length())
    }
}
