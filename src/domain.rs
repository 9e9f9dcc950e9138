//! Core data types shared by the pack pipeline.

use std::path::PathBuf;

/// Default cap on the number of files accepted per pack.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Default cap on cumulative content bytes; keeps packs under typical chat limits.
pub const DEFAULT_MAX_BYTES: u64 = 800_000;

/// Resolved run configuration. Immutable once built by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Paths exactly as given, duplicates preserved.
    pub files: Vec<String>,
    pub max_files: usize,
    pub max_bytes: u64,
    pub no_git: bool,
    pub fence: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            max_files: DEFAULT_MAX_FILES,
            max_bytes: DEFAULT_MAX_BYTES,
            no_git: false,
            fence: false,
        }
    }
}

/// Version-control metadata discovered for the working directory.
///
/// `name`, `branch` and `commit` are only ever populated when `root` is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoContext {
    pub root: Option<PathBuf>,
    pub name: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
}

/// One loaded input file, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub display_path: String,
    pub sha256: String,
    pub content: String,
}

/// Header fields printed above the file records.
#[derive(Debug, Clone)]
pub struct PackHeader<'a> {
    pub generated_utc: String,
    pub repo: &'a RepoContext,
}
