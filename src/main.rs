//! context-pack: bundle source files and repository metadata into a single
//! pasteable context block for chat-based assistants.

use std::process::ExitCode;

fn main() -> ExitCode {
    context_pack::cli::run()
}
