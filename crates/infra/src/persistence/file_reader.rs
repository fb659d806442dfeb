use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use line_report_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file as UTF-8 text.
    ///
    /// Any failure, including invalid UTF-8, is reported as
    /// [`InfrastructureError::FileRead`] for `path`.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path).map_err(|e| InfrastructureError::file_read(path, e))?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| InfrastructureError::file_read(path, e))?;
        Ok(text)
    }
}
