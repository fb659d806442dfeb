// crates/infra/src/filesystem.rs
use std::path::Path;

use line_report_ports::text_source::TextSource;
use line_report_shared_kernel::InfraResult;
use log::trace;

use crate::persistence::FileReader;

/// [`TextSource`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextSource;

impl FsTextSource {
    pub const fn new() -> Self {
        Self
    }
}

impl TextSource for FsTextSource {
    fn read_text(&self, path: &Path) -> InfraResult<String> {
        let text = FileReader::read_to_string(path)?;
        trace!("read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}
