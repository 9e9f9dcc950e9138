//! File loading, hashing and byte-budget enforcement.

use crate::domain::{FileEntry, RepoContext};
use crate::error::{PackError, Result};
use crate::utils::{display_path, read_text_lossy, resolve_against, sha256_hex};
use std::path::Path;

/// Load every requested file in order.
///
/// Relative paths resolve against the repository root when one is known,
/// otherwise against `cwd`. Each file is validated, read and hashed before its
/// size joins the running total; the run stops at the first file that pushes
/// the total past `max_bytes`, so later files are never opened.
pub fn load_files(
    requested: &[String],
    repo: &RepoContext,
    cwd: &Path,
    max_bytes: u64,
) -> Result<Vec<FileEntry>> {
    let base = repo.root.as_deref().unwrap_or(cwd);
    let mut entries = Vec::with_capacity(requested.len());
    let mut total_bytes: u64 = 0;

    for raw in requested {
        let resolved = resolve_against(raw, base);
        if !resolved.is_file() {
            return Err(PackError::NotAFile { path: raw.clone() });
        }

        let content = read_text_lossy(&resolved)
            .map_err(|source| PackError::Read { path: resolved.clone(), source })?;
        let sha256 = sha256_hex(&content);
        let display_path = display_path(&resolved, repo.root.as_deref());

        total_bytes += content.len() as u64;
        tracing::debug!(path = %display_path, bytes = content.len(), total_bytes, "loaded file");
        if total_bytes > max_bytes {
            return Err(PackError::TooLarge { max_bytes });
        }

        entries.push(FileEntry { display_path, sha256, content });
    }

    Ok(entries)
}
