//! FFmpeg command builder utilities
//!
//! This module provides a builder for the ffmpeg invocation that re-encodes
//! the video stream through a frame rate filter while copying audio verbatim.

use crate::processing::filter::FrameRateFilter;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;

/// Builder for creating `FFmpeg` commands with common configurations
pub struct FfmpegCommandBuilder {
    cmd: FfmpegCommand,
}

impl Default for FfmpegCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegCommandBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cmd: FfmpegCommand::new(),
        }
    }

    /// Builds the frame rate conversion command.
    ///
    /// Argument order: `-hide_banner -i <input> -filter:v <filter> -c:a copy -y <output>`.
    /// The output path is always the last argument; an existing file there
    /// is replaced.
    #[must_use]
    pub fn build_frame_rate_conversion(
        mut self,
        input: &Path,
        filter: &FrameRateFilter,
        output: &Path,
    ) -> FfmpegCommand {
        self.cmd.arg("-hide_banner");
        self.cmd.input(input.to_string_lossy().as_ref());
        self.cmd.arg("-filter:v");
        self.cmd.arg(filter.to_filter_string());
        self.cmd.arg("-c:a");
        self.cmd.arg("copy");
        self.cmd.arg("-y");
        self.cmd.output(output.to_string_lossy().as_ref());
        self.cmd
    }
}

/// Collects the arguments of a built command as strings.
#[must_use]
pub fn command_args(cmd: &FfmpegCommand) -> Vec<String> {
    cmd.get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
