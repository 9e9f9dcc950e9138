//! Context pack text rendering.

use crate::domain::{FileEntry, PackHeader};
use chrono::{DateTime, Utc};

pub const BEGIN_PACK: &str = "BEGIN_CONTEXT_PACK";
pub const END_PACK: &str = "END_CONTEXT_PACK";
pub const BEGIN_FILE: &str = "BEGIN_FILE";
pub const END_FILE: &str = "END_FILE";
pub const CONTENT_START: &str = "CONTENT_START";
pub const CONTENT_END: &str = "CONTENT_END";
pub const FENCE_OPEN: &str = "```text";
pub const FENCE_CLOSE: &str = "```";

/// ISO-8601 UTC timestamp with second precision and explicit offset.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}

/// Render the complete pack. Header fields the repository probe did not
/// find are left out rather than printed empty.
pub fn render_context_pack(header: &PackHeader<'_>, entries: &[FileEntry], fence: bool) -> String {
    let mut out = String::new();
    let mut line = |text: &str| {
        out.push_str(text);
        out.push('\n');
    };

    if fence {
        line(FENCE_OPEN);
    }

    line(BEGIN_PACK);
    line(&format!("generated_utc: {}", header.generated_utc));
    let repo = header.repo;
    if let Some(root) = &repo.root {
        line(&format!("repo_root: {}", root.display()));
    }
    if let Some(name) = &repo.name {
        line(&format!("repo_name: {name}"));
    }
    if let Some(branch) = &repo.branch {
        line(&format!("git_branch: {branch}"));
    }
    if let Some(commit) = &repo.commit {
        line(&format!("git_commit: {commit}"));
    }
    line(&format!("file_count: {}", entries.len()));
    line("");

    for entry in entries {
        line(BEGIN_FILE);
        line(&format!("path: {}", entry.display_path));
        line(&format!("sha256: {}", entry.sha256));
        line(CONTENT_START);
        line(entry.content.trim_end_matches('\n'));
        line(CONTENT_END);
        line(END_FILE);
        line("");
    }

    line(END_PACK);

    if fence {
        line(FENCE_CLOSE);
    }

    out
}
