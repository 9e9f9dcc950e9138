//! Repository metadata probing.
//!
//! Every query is optional: a machine without `git`, a directory outside any
//! work tree, or a repository with no commits all degrade to absent fields.

use crate::domain::RepoContext;
use std::path::{Path, PathBuf};

pub mod git;

pub use git::GitProbe;

/// Discover root, name, branch and commit for `cwd`.
///
/// Branch and commit are only queried once the root is known.
pub fn probe_repository(probe: &GitProbe, cwd: &Path) -> RepoContext {
    let Some(toplevel) = probe.show_toplevel(cwd) else {
        tracing::debug!(cwd = %cwd.display(), "no git repository detected");
        return RepoContext::default();
    };

    let root = PathBuf::from(toplevel);
    let name = repo_name(&root);
    let branch = probe.current_branch(cwd);
    let commit = probe.head_commit(cwd);

    tracing::debug!(
        root = %root.display(),
        name = ?name,
        branch = ?branch,
        commit = ?commit,
        "repository metadata"
    );

    RepoContext { root: Some(root), name, branch, commit }
}

/// Display name of a repository: the root directory's final component.
pub fn repo_name(root: &Path) -> Option<String> {
    root.file_name().map(|n| n.to_string_lossy().into_owned()).filter(|n| !n.is_empty())
}
