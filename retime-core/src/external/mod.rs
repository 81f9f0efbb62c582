// ============================================================================
// retime-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates interactions with the external command-line tools.
// The pipeline only talks to them through the FfmpegSpawner and
// FfprobeExecutor traits, so tests can swap in the mocks.
//
// KEY COMPONENTS:
// - Traits for external tool interactions (FfmpegSpawner, FfprobeExecutor)
// - Concrete implementations using ffmpeg-sidecar and ffprobe crates
// - Command building for the conversion
// - Dependency checking

use crate::error::{CoreResult, command_start_error};
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Builds the ffmpeg conversion command
pub mod ffmpeg_builder;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

#[cfg(test)]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_builder::{FfmpegCommandBuilder, command_args};
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor, MediaInfo};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command is available and executable.
///
/// Runs `<cmd_name> -version` with output discarded. Only the ability to
/// start the process matters, not its exit status.
///
/// # Returns
///
/// * `Ok(())` - The command could be started
/// * `Err(CoreError::DependencyNotFound)` - The command is not on PATH
/// * `Err(CoreError::CommandStart)` - The command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) => {
            log::warn!("Dependency check for '{cmd_name}' failed: {e}");
            Err(command_start_error(cmd_name, e))
        }
    }
}
