//! Command-line interface for context-pack
//!
//! Parses arguments, wires logging, and runs the pack pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, PackHeader, RepoContext};
use crate::error::PackError;
use crate::load::load_files;
use crate::render::{format_timestamp, render_context_pack};
use crate::repo::{probe_repository, GitProbe};

/// Bundle source files and repository metadata into one pasteable context pack
#[derive(Parser, Debug)]
#[command(name = "context-pack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File paths relative to the repository root (or absolute)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,

    /// Maximum number of files accepted [default: 5]
    #[arg(long, value_name = "N", env = "CONTEXT_PACK_MAX_FILES")]
    pub max_files: Option<usize>,

    /// Maximum total content size in bytes [default: 800000]
    #[arg(long, value_name = "BYTES", env = "CONTEXT_PACK_MAX_BYTES")]
    pub max_bytes: Option<u64>,

    /// Skip git metadata (for non-git folders)
    #[arg(long)]
    pub no_git: bool,

    /// Wrap output in a triple-backtick code fence
    #[arg(long)]
    pub fence: bool,

    /// Path to config file (context-pack.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            files: self.files.clone(),
            max_files: self.max_files,
            max_bytes: self.max_bytes,
            no_git: self.no_git,
            fence: self.fence,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<PackError>() {
                Some(pack_err) => pack_err.exit_code(),
                None => 1,
            };
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn init_tracing(verbose: bool) {
    // A valid RUST_LOG wins outright; otherwise --verbose picks DEBUG over WARN.
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let file_config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(cli.overrides(), &file_config);
    tracing::debug!(?config, "resolved configuration");

    let pack = build_pack(&config, &cwd, &GitProbe::new())?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(pack.as_bytes()).context("Failed to write context pack")?;
    handle.flush().context("Failed to write context pack")?;
    Ok(())
}

/// Run the whole pipeline and return the rendered pack.
///
/// Nothing is written anywhere: every validation failure surfaces here, before
/// the caller prints a single byte.
pub fn build_pack(config: &Config, cwd: &Path, probe: &GitProbe) -> Result<String, PackError> {
    if config.files.len() > config.max_files {
        return Err(PackError::TooManyFiles { count: config.files.len(), max: config.max_files });
    }

    let repo =
        if config.no_git { RepoContext::default() } else { probe_repository(probe, cwd) };
    let generated_utc = format_timestamp(chrono::Utc::now());

    let entries = load_files(&config.files, &repo, cwd, config.max_bytes)?;
    tracing::debug!(files = entries.len(), "all files loaded");

    let header = PackHeader { generated_utc, repo: &repo };
    Ok(render_context_pack(&header, &entries, config.fence))
}
