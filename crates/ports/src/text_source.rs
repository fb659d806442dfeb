// crates/ports/src/text_source.rs
use std::path::Path;

use line_report_shared_kernel::InfraResult;

/// Port for loading the full text behind a path.
pub trait TextSource {
    fn read_text(&self, path: &Path) -> InfraResult<String>;
}
