//! FFprobe integration for media analysis
//!
//! This module runs ffprobe (through the `ffprobe` crate, which requests JSON
//! format and stream metadata) and extracts the container duration used to
//! verify a conversion, plus the summary shown by `retime info`.

use crate::error::{CoreResult, probe_error};
use crate::utils::parse_frame_rate;
use ffprobe::{FfProbe, FfProbeError, ffprobe};
use serde::Serialize;
use std::path::Path;

/// Summary of a probed media file.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MediaInfo {
    /// Container duration in seconds
    pub duration: f64,
    /// Width of the first video stream
    pub width: Option<i64>,
    /// Height of the first video stream
    pub height: Option<i64>,
    /// Average frame rate of the first video stream
    pub frame_rate: Option<f64>,
    pub video_codec: Option<String>,
    pub audio_streams: usize,
}

/// Trait for the ffprobe calls the pipeline needs.
pub trait FfprobeExecutor {
    /// Returns the container duration (`format.duration`) in seconds.
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;

    /// Returns a summary of the file's format and streams.
    fn get_media_info(&self, path: &Path) -> CoreResult<MediaInfo>;
}

/// `FfprobeExecutor` backed by the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn run(&self, path: &Path) -> CoreResult<FfProbe> {
        log::debug!("Running ffprobe (via crate) on: {}", path.display());
        ffprobe(path).map_err(|err| {
            log::error!("ffprobe failed on {}: {err:?}", path.display());
            map_ffprobe_error(err, path)
        })
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        let metadata = self.run(path)?;
        duration_from_metadata(&metadata, path)
    }

    fn get_media_info(&self, path: &Path) -> CoreResult<MediaInfo> {
        let metadata = self.run(path)?;
        media_info_from_metadata(&metadata, path)
    }
}

/// Extracts `format.duration` as a non-negative number of seconds.
pub fn duration_from_metadata(metadata: &FfProbe, path: &Path) -> CoreResult<f64> {
    let raw = metadata
        .format
        .duration
        .as_deref()
        .ok_or_else(|| probe_error(path, "ffprobe output has no format.duration"))?;

    let duration = raw.trim().parse::<f64>().map_err(|e| {
        probe_error(path, format!("format.duration '{raw}' is not a number: {e}"))
    })?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(probe_error(
            path,
            format!("format.duration '{raw}' is not a valid duration"),
        ));
    }

    Ok(duration)
}

/// Builds a `MediaInfo` from probe output. The duration is required.
pub fn media_info_from_metadata(metadata: &FfProbe, path: &Path) -> CoreResult<MediaInfo> {
    let mut info = MediaInfo {
        duration: duration_from_metadata(metadata, path)?,
        audio_streams: metadata
            .streams
            .iter()
            .filter(|s| s.codec_type.as_deref() == Some("audio"))
            .count(),
        ..Default::default()
    };

    if let Some(video_stream) = metadata
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
    {
        info.width = video_stream.width;
        info.height = video_stream.height;
        info.frame_rate = parse_frame_rate(&video_stream.avg_frame_rate)
            .or_else(|| parse_frame_rate(&video_stream.r_frame_rate));
        info.video_codec = video_stream.codec_name.clone();
    } else {
        log::warn!("No video stream found by ffprobe for {}", path.display());
    }

    Ok(info)
}

fn map_ffprobe_error(err: FfProbeError, path: &Path) -> crate::error::CoreError {
    match err {
        FfProbeError::Io(io_err) => probe_error(path, format!("could not run ffprobe: {io_err}")),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            probe_error(
                path,
                format!("ffprobe exited with {}: {}", output.status, stderr.trim()),
            )
        }
        FfProbeError::Deserialize(err) => {
            probe_error(path, format!("ffprobe output deserialization: {err}"))
        }
        _ => probe_error(path, format!("unknown ffprobe error: {err:?}")),
    }
}
