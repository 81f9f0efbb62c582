//! Frame rate conversion pipeline.
//!
//! One conversion is a single sequential pass:
//! probe input -> run ffmpeg with the selected filter -> check the output
//! exists -> probe output -> compare durations -> report size.
//!
//! Any failure ends the run and is returned to the caller. Nothing is
//! retried and a partially written output file is left in place.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegCommandBuilder, FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use crate::processing::duration::check_duration;
use crate::request::{JobRequest, JobResult};
use crate::utils::{format_bytes, parse_ffmpeg_time};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, FfmpegProgress};
use log::{debug, error, info};
use std::fs;
use std::process::ExitStatus;


/// Progress of a running conversion, measured against the input duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeProgress {
    /// Output timestamp reached so far, in seconds
    pub current_secs: f64,
    /// Input duration in seconds
    pub total_secs: f64,
    /// 0.0 to 100.0
    pub percent: f64,
    pub frame: u32,
    pub fps: f32,
    pub speed: f32,
}

/// Converts `request` and returns the produced file.
///
/// See [`transcode_with_progress`]; this variant discards progress events.
pub fn transcode<S, P>(
    spawner: &S,
    prober: &P,
    config: &CoreConfig,
    request: &JobRequest,
) -> CoreResult<JobResult>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    transcode_with_progress(spawner, prober, config, request, |_| {})
}

/// Converts `request`, reporting ffmpeg progress to `on_progress`.
///
/// # Errors
///
/// * `CoreError::Probe` - the input or output could not be probed
/// * `CoreError::Transcode` - ffmpeg exited non-zero
/// * `CoreError::OutputMissing` - ffmpeg succeeded but wrote no file
/// * `CoreError::Io`, `CoreError::InvalidConfig` - output directory problems
///
/// A duration mismatch beyond the tolerance is only logged; it is reported
/// in `JobResult::duration_check`.
pub fn transcode_with_progress<S, P, F>(
    spawner: &S,
    prober: &P,
    config: &CoreConfig,
    request: &JobRequest,
    mut on_progress: F,
) -> CoreResult<JobResult>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
    F: FnMut(&TranscodeProgress),
{
    config.validate()?;

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.resolve_output_path()?;
    debug!("Output path: {}", output_path.display());

    let input_duration = prober.probe_duration(request.input())?;
    info!("Input video duration: {input_duration:.2} seconds");

    let filter = request.filter();
    info!("Video filter: {filter}");

    let cmd = FfmpegCommandBuilder::new().build_frame_rate_conversion(
        request.input(),
        &filter,
        &output_path,
    );
    let (status, transcript) = run_ffmpeg(spawner, cmd, input_duration, &mut on_progress)?;

    if !status.success() {
        error!("FFmpeg command failed ({status})");
        error!("FFmpeg stdout: {}", transcript.stdout);
        error!("FFmpeg stderr: {}", transcript.stderr);
        return Err(CoreError::Transcode {
            status,
            stdout: transcript.stdout,
            stderr: transcript.stderr,
        });
    }
    debug!("FFmpeg stdout: {}", transcript.stdout);
    debug!("FFmpeg stderr: {}", transcript.stderr);

    // A reserved unique name exists as an empty file until ffmpeg writes it.
    let written = fs::metadata(&output_path).is_ok_and(|m| m.len() > 0);
    if !written {
        error!("Output file was not created at {}", output_path.display());
        return Err(CoreError::OutputMissing(output_path));
    }

    let output_duration = prober.probe_duration(&output_path)?;
    info!("Output video duration: {output_duration:.2} seconds");
    info!("Output frame rate: {} fps", filter.fps());

    let duration_check = check_duration(
        input_duration,
        output_duration,
        config.duration_tolerance_secs,
    );
    duration_check.log();

    let output_size = fs::metadata(&output_path)?.len();
    info!(
        "Output file size: {output_size} bytes ({})",
        format_bytes(output_size)
    );
    info!("Output file exists: {}", output_path.exists());

    Ok(JobResult {
        output_path,
        target_fps: filter.fps(),
        interpolated: filter.is_interpolating(),
        output_size,
        duration_check,
    })
}

/// Captured ffmpeg output.
#[derive(Debug, Default)]
struct Transcript {
    stdout: String,
    stderr: String,
}

/// Spawns ffmpeg, drains its events and waits for it.
///
/// The process is waited on even when event handling fails.
fn run_ffmpeg<S, F>(
    spawner: &S,
    cmd: FfmpegCommand,
    total_secs: f64,
    on_progress: &mut F,
) -> CoreResult<(ExitStatus, Transcript)>
where
    S: FfmpegSpawner,
    F: FnMut(&TranscodeProgress),
{
    let mut process = spawner.spawn(cmd)?;
    let mut transcript = Transcript::default();

    let events_result = process.handle_events(|event| {
        match event {
            FfmpegEvent::Progress(progress) => {
                on_progress(&progress_from_event(&progress, total_secs));
            }
            FfmpegEvent::OutputChunk(chunk) => {
                transcript.stdout.push_str(&String::from_utf8_lossy(&chunk));
            }
            other => {
                if let Some(line) = stderr_line(other) {
                    transcript.stderr.push_str(&line);
                    transcript.stderr.push('\n');
                }
            }
        }
        Ok(())
    });

    let status = process.wait();
    events_result?;
    Ok((status?, transcript))
}

/// The stderr line behind an event. ffmpeg-sidecar turns banner, input,
/// output and stream lines into parsed events; their raw text is kept so the
/// transcript matches what ffmpeg printed.
fn stderr_line(event: FfmpegEvent) -> Option<String> {
    match event {
        FfmpegEvent::Log(_, message) | FfmpegEvent::Error(message) => Some(message),
        FfmpegEvent::ParsedStreamMapping(line) => Some(line),
        FfmpegEvent::ParsedVersion(v) => Some(v.raw_log_message),
        FfmpegEvent::ParsedConfiguration(c) => Some(c.raw_log_message),
        FfmpegEvent::ParsedInput(input) => Some(input.raw_log_message),
        FfmpegEvent::ParsedOutput(output) => Some(output.raw_log_message),
        FfmpegEvent::ParsedDuration(duration) => Some(duration.raw_log_message),
        FfmpegEvent::ParsedInputStream(stream) | FfmpegEvent::ParsedOutputStream(stream) => {
            Some(stream.raw_log_message)
        }
        _ => None,
    }
}

fn progress_from_event(progress: &FfmpegProgress, total_secs: f64) -> TranscodeProgress {
    let current_secs = parse_ffmpeg_time(&progress.time).unwrap_or(0.0);
    let percent = if total_secs > 0.0 {
        (current_secs / total_secs * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    TranscodeProgress {
        current_secs,
        total_secs,
        percent,
        frame: progress.frame,
        fps: progress.fps,
        speed: progress.speed,
    }
}
