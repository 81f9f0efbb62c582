// ============================================================================
// retime-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the retime core library
//
// Every failure of a conversion surfaces as one CoreError variant so callers
// can tell a failed probe from a failed transcode without string matching.
//
// KEY COMPONENTS:
// - CoreError: The error enum for all core operations
// - CoreResult: Result alias used throughout the crate
// - Helper constructors for process related failures

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the retime core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The job request failed validation.
    #[error("Invalid job request: {0}")]
    InvalidRequest(String),

    /// The configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Required dependency '{0}' not found on PATH")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed while waiting for {0}: {1}")]
    CommandWait(String, #[source] io::Error),

    /// ffprobe could not be run, failed, or produced no usable duration.
    #[error("Probe of '{}' failed: {reason}", path.display())]
    Probe { path: PathBuf, reason: String },

    /// ffmpeg exited with a non-zero status.
    #[error("ffmpeg transcode failed ({status})")]
    Transcode {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    /// ffmpeg reported success but the output file is absent.
    #[error("Output file was not created at {}", .0.display())]
    OutputMissing(PathBuf),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for retime core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CoreError::Probe` for the given file.
pub fn probe_error(path: &Path, reason: impl Into<String>) -> CoreError {
    CoreError::Probe {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Maps a spawn failure to `DependencyNotFound` or `CommandStart`.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    let cmd = cmd.into();
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd)
    } else {
        CoreError::CommandStart(cmd, err)
    }
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}
