// retime-cli/src/lib.rs
//
// Library portion of the retime CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod progress;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ConvertArgs, InfoArgs};
pub use commands::{run_convert, run_info};
