//! context-pack: bundle a few source files into one pasteable block
//!
//! Validates a bounded file list, optionally records git metadata, hashes each
//! file, and renders a deterministic text envelope for chat-based assistants.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod load;
pub mod render;
pub mod repo;
pub mod utils;

pub use domain::{Config, FileEntry, PackHeader, RepoContext};
pub use error::PackError;
