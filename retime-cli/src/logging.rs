// ============================================================================
// retime-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and file logging for the CLI
//
// The core library only uses the `log` facade. This module installs a fern
// dispatcher that prints records to stderr and, when requested, appends them
// with timestamps to a log file.
//
// Levels:
// - default: Info
// - --verbose: Debug
// ffmpeg-sidecar's own records are capped at Warn.

use crate::error::{CliErrorContext, CliResult};
use log::LevelFilter;
use std::path::Path;

/// Log level for the given verbosity.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Must be called at most once per process.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level_for(verbose))
        .level_for("ffmpeg_sidecar", LevelFilter::Warn)
        .chain(console);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).cli_with_context(|| {
                format!("Failed to create log directory '{}'", parent.display())
            })?;
        }
        let file = fern::log_file(path)
            .cli_with_context(|| format!("Failed to open log file '{}'", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    dispatch
        .apply()
        .map_err(|e| retime_core::CoreError::OperationFailed(format!("Failed to initialize logging: {e}")))
}
