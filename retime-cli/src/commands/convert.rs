//! Implementation of the 'convert' subcommand.
//!
//! Builds the core configuration and job request from the CLI arguments,
//! checks that ffmpeg and ffprobe are installed, runs the conversion and
//! prints where the result was written.

use crate::cli::ConvertArgs;
use crate::error::CliResult;
use crate::progress::CliProgress;

use retime_core::external::{CrateFfprobeExecutor, SidecarSpawner};
use retime_core::{
    CoreConfig, JobRequest, JobResult, OutputNaming, check_dependency, transcode_with_progress,
};

use log::{debug, info};

/// Creates and validates the CoreConfig for the given arguments.
pub fn create_core_config(args: &ConvertArgs) -> CliResult<CoreConfig> {
    let mut config = match &args.output_dir {
        Some(dir) => CoreConfig::new(dir.clone()),
        None => CoreConfig::default(),
    };

    if args.unique_name {
        config.output_naming = OutputNaming::Unique;
    } else if let Some(name) = &args.output_name {
        config.output_naming = OutputNaming::Fixed(name.clone());
    }

    config.duration_tolerance_secs = args.duration_tolerance;

    config.validate()?;
    Ok(config)
}

/// Renders what `convert` prints on stdout.
pub fn format_result(result: &JobResult, json: bool) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.output_path.display().to_string())
    }
}

/// Runs the conversion described by `args`.
pub fn run_convert(args: ConvertArgs) -> CliResult<()> {
    let request = JobRequest::new(&args.input, args.fps, args.interpolate)?;
    let config = create_core_config(&args)?;

    check_dependency("ffprobe")?;
    check_dependency("ffmpeg")?;
    debug!("External dependency check passed.");

    info!("Input path: {}", request.input().display());
    info!("Output directory: {}", config.output_dir.display());
    info!(
        "Target frame rate: {} fps ({})",
        request.target_fps(),
        if request.interpolate() {
            "motion interpolation"
        } else {
            "frame drop/duplicate"
        }
    );

    let progress = CliProgress::new(!args.no_progress);
    let outcome = transcode_with_progress(
        &SidecarSpawner,
        &CrateFfprobeExecutor::new(),
        &config,
        &request,
        |p| progress.update(p),
    );
    progress.finish();
    let result = outcome?;

    println!("{}", format_result(&result, args.json)?);
    Ok(())
}
