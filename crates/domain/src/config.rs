use std::path::{Path, PathBuf};

use derive_builder::Builder;
use line_report_shared_kernel::MinLineLength;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_NAME: &str = "go-app";
pub const DEFAULT_INPUT_PATH: &str = "sample.txt";
pub const DEFAULT_MIN_LINE_LENGTH: usize = 3;

/// Settings for a single pipeline run. Values are taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default)]
pub struct AppConfig {
    project_name: String,
    input_path: PathBuf,
    min_line_length: MinLineLength,
}

impl AppConfig {
    /// Returns the built-in configuration. There is no external source.
    pub fn load() -> Self {
        Self::default()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub const fn min_line_length(&self) -> MinLineLength {
        self.min_line_length
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            min_line_length: MinLineLength::new(DEFAULT_MIN_LINE_LENGTH),
        }
    }
}
