//! Config file loading

use crate::error::PackError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "context-pack";
const CANDIDATES: [&str; 2] = ["context-pack.toml", ".context-pack.toml"];

/// Defaults read from a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub max_files: Option<usize>,
    pub max_bytes: Option<u64>,
    pub no_git: Option<bool>,
    pub fence: Option<bool>,
}

/// Load the explicit config file, or the first candidate found in `search_dir`.
///
/// Problems with an explicit file are errors. Problems with an
/// auto-discovered file are logged and the defaults are used instead.
pub fn load_config(
    search_dir: &Path,
    config_path: Option<&Path>,
) -> std::result::Result<FileConfig, PackError> {
    if let Some(path) = config_path {
        return read_config(path)
            .map_err(|e| PackError::Config { path: path.to_path_buf(), message: format!("{e:#}") });
    }

    let Some(config_file) = discover_config(search_dir) else {
        return Ok(FileConfig::default());
    };

    match read_config(&config_file) {
        Ok(cfg) => {
            tracing::debug!(path = %config_file.display(), "loaded config file");
            Ok(cfg)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(FileConfig::default())
        }
    }
}

fn read_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading config file: {}", path.display()))?;
    parse_toml_config(&content)
}

/// Parse TOML config, accepting either top-level keys or a `[context-pack]` table.
fn parse_toml_config(content: &str) -> Result<FileConfig> {
    let raw: toml::Value = toml::from_str(content).context("Invalid TOML syntax")?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().context("Invalid config values")
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn test_load_discovered_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("context-pack.toml"), "max_files = 9\nfence = true\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.max_files, Some(9));
        assert_eq!(cfg.fence, Some(true));
        assert_eq!(cfg.max_bytes, None);
    }

    #[test]
    fn test_nested_section_is_used() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".context-pack.toml"),
            "[context-pack]\nmax_bytes = 1024\nno_git = true\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.max_bytes, Some(1024));
        assert_eq!(cfg.no_git, Some(true));
    }

    #[test]
    fn test_plain_name_wins_over_dotfile() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("context-pack.toml"), "max_files = 1\n").expect("write");
        fs::write(tmp.path().join(".context-pack.toml"), "max_files = 2\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.max_files, Some(1));
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "max_files = \"many\"\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).expect_err("invalid type");
        assert!(matches!(err, PackError::Config { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "max_file = 3\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_missing_config_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("context-pack.toml"), "max_files = [1, 2]\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, FileConfig::default());
    }
}
