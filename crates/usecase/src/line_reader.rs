use std::path::Path;

use line_report_domain::{fallback_lines, split_lines};
use line_report_ports::text_source::TextSource;
use log::debug;

/// Loads the lines of a file, substituting the fallback on any read failure.
pub struct ReadLines<'a> {
    source: &'a dyn TextSource,
}

impl<'a> ReadLines<'a> {
    pub fn new(source: &'a dyn TextSource) -> Self {
        Self { source }
    }

    /// Never fails. An unreadable file yields the fallback lines, while a
    /// readable file with no non-empty lines yields an empty vector.
    pub fn run(&self, path: &Path) -> Vec<String> {
        match self.source.read_text(path) {
            Ok(text) => split_lines(&text),
            Err(err) => {
                debug!("using fallback lines: {err}");
                fallback_lines()
            }
        }
    }
}
