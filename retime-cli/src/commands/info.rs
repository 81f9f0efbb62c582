//! Implementation of the 'info' subcommand.

use crate::cli::InfoArgs;
use crate::error::{CliErrorContext, CliResult};

use retime_core::external::{CrateFfprobeExecutor, FfprobeExecutor};
use retime_core::{CoreError, MediaInfo, check_dependency, format_duration};

/// Renders the media info as the lines printed by `info`.
pub fn format_media_info(info: &MediaInfo) -> String {
    let resolution = match (info.width, info.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => "unknown".to_string(),
    };
    let frame_rate = info
        .frame_rate
        .map(|fps| format!("{fps:.3} fps"))
        .unwrap_or_else(|| "unknown".to_string());

    [
        format!("Duration:      {} ({:.2} s)", format_duration(info.duration), info.duration),
        format!("Resolution:    {resolution}"),
        format!("Frame rate:    {frame_rate}"),
        format!(
            "Video codec:   {}",
            info.video_codec.as_deref().unwrap_or("unknown")
        ),
        format!("Audio streams: {}", info.audio_streams),
    ]
    .join("\n")
}

pub fn run_info(args: InfoArgs) -> CliResult<()> {
    if !args.input.is_file() {
        return Err(CoreError::InputNotFound(args.input));
    }
    check_dependency("ffprobe")?;

    let info = CrateFfprobeExecutor::new()
        .get_media_info(&args.input)
        .cli_with_context(|| format!("Could not read '{}'", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", format_media_info(&info));
    }
    Ok(())
}
