//! Best-effort `git` subprocess queries.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `git` commands where every failure collapses to `None`.
#[derive(Debug, Clone)]
pub struct GitProbe {
    program: OsString,
}

impl Default for GitProbe {
    fn default() -> Self {
        Self { program: OsString::from("git") }
    }
}

impl GitProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    /// Run `git <args>` in `cwd` and return trimmed stdout.
    ///
    /// Missing executable, non-zero exit and empty output all yield `None`.
    /// The child's stderr is discarded.
    pub fn run(&self, cwd: &Path, args: &[&str]) -> Option<String> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            tracing::debug!(args = ?args, status = %output.status, "git query failed");
            return None;
        }
        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn show_toplevel(&self, cwd: &Path) -> Option<String> {
        self.run(cwd, &["rev-parse", "--show-toplevel"])
    }

    pub fn current_branch(&self, cwd: &Path) -> Option<String> {
        self.run(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn head_commit(&self, cwd: &Path) -> Option<String> {
        self.run(cwd, &["rev-parse", "HEAD"])
    }
}
