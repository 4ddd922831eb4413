use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PipelineError, Result};

pub const INPUT_DIR_ENV: &str = "RACEGC_INPUT_DIR";
pub const OUTPUT_DIR_ENV: &str = "RACEGC_OUTPUT_DIR";
pub const OUTPUT_FILE_ENV: &str = "RACEGC_OUTPUT_FILE";

/// Where a classification run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    /// Glob matched against file names inside `input_dir`.
    pub file_pattern: String,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("results"),
            output_dir: PathBuf::from("output"),
            output_file: "general_classification.csv".to_string(),
            file_pattern: "*.csv".to_string(),
            preview_rows: 10,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| PipelineError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Overrides fields from `RACEGC_*` environment variables that are set.
    pub fn apply_env(&mut self) {
        if let Ok(dir) = env::var(INPUT_DIR_ENV) {
            self.input_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var(OUTPUT_DIR_ENV) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var(OUTPUT_FILE_ENV) {
            self.output_file = file;
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
