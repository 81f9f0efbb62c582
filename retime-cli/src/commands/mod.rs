// ============================================================================
// retime-cli/src/commands/mod.rs
// ============================================================================
//
// COMMAND MODULES: Implementations of the retime subcommands
//
// - convert: change a video's frame rate
// - info: print what ffprobe reports about a video

pub mod convert;
pub mod info;

pub use convert::run_convert;
pub use info::run_info;
