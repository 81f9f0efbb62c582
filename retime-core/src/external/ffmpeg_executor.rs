// retime-core/src/external/ffmpeg_executor.rs
//
// The conversion pipeline starts ffmpeg through `FfmpegSpawner` and reads
// its event stream through `FfmpegProcess`. Production code plugs in the
// ffmpeg-sidecar implementations below; tests plug in `mocks`.

use crate::error::{CoreResult, command_start_error, command_wait_error};
use crate::external::ffmpeg_builder::command_args;
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::process::ExitStatus;

/// A started ffmpeg run.
pub trait FfmpegProcess {
    /// Feeds every event ffmpeg emits to `handler` until the stream ends or
    /// the handler fails.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Blocks until ffmpeg exits.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Starts ffmpeg runs.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// A real ffmpeg child.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {e}");
            crate::error::CoreError::OperationFailed(format!(
                "ffmpeg event stream unavailable: {e}"
            ))
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0.wait().map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Spawns the ffmpeg binary found on PATH.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        log::debug!("Spawning ffmpeg: {}", command_args(&cmd).join(" "));
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg", e))
    }
}
