//! Merge CLI arguments with file configuration.

use super::FileConfig;
use crate::domain::{Config, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES};

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub files: Vec<String>,
    pub max_files: Option<usize>,
    pub max_bytes: Option<u64>,
    pub no_git: bool,
    pub fence: bool,
}

/// Build the run configuration. CLI/env values beat the file, the file beats
/// built-in defaults, and switches are enabled if either source sets them.
pub fn merge_cli_with_config(cli: CliOverrides, file: &FileConfig) -> Config {
    Config {
        files: cli.files,
        max_files: cli.max_files.or(file.max_files).unwrap_or(DEFAULT_MAX_FILES),
        max_bytes: cli.max_bytes.or(file.max_bytes).unwrap_or(DEFAULT_MAX_BYTES),
        no_git: cli.no_git || file.no_git.unwrap_or(false),
        fence: cli.fence || file.fence.unwrap_or(false),
    }
}
