//! Output rendering

pub mod context_pack;

pub use context_pack::{format_timestamp, render_context_pack};
