//! Shared helpers: hashing, lossy decoding, path display.

pub mod encoding;
pub mod hashing;
pub mod paths;

pub use encoding::read_text_lossy;
pub use hashing::sha256_hex;
pub use paths::{display_path, resolve_against, to_slash_path};
