//! Path resolution and display helpers

use std::path::{Path, PathBuf};

/// Join the components of a relative path with `/` regardless of platform.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve a requested path: absolute paths pass through, relative ones are
/// joined onto `base`.
pub fn resolve_against(raw: &str, base: &Path) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Path recorded in the pack for `resolved`.
///
/// Relative to `root` when the canonical file lies under the canonical root,
/// otherwise the resolved path unchanged.
pub fn display_path(resolved: &Path, root: Option<&Path>) -> String {
    let fallback = || resolved.display().to_string();
    let Some(root) = root else {
        return fallback();
    };
    let (Ok(file), Ok(root)) = (resolved.canonicalize(), root.canonicalize()) else {
        return fallback();
    };
    match file.strip_prefix(&root) {
        Ok(relative) => to_slash_path(relative),
        Err(_) => fallback(),
    }
}
