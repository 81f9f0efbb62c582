//! Core library for changing a video's frame rate with ffmpeg and ffprobe.
//!
//! The crate validates a conversion request, probes the input duration,
//! runs ffmpeg with either a plain `fps` filter or a motion-interpolating
//! `minterpolate` filter, and verifies the produced file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use retime_core::{CoreConfig, JobRequest, transcode};
//! use retime_core::external::{CrateFfprobeExecutor, SidecarSpawner};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/tmp/retime_output"));
//! let request = JobRequest::new("/videos/clip.mp4", 30.0, false).unwrap();
//!
//! let result = transcode(
//!     &SidecarSpawner,
//!     &CrateFfprobeExecutor::new(),
//!     &config,
//!     &request,
//! ).unwrap();
//! println!("{}", result.output_path.display());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;
pub mod request;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, OutputNaming};
pub use error::{CoreError, CoreResult};
pub use external::{MediaInfo, check_dependency};
pub use processing::{
    DurationCheck, FrameRateFilter, TranscodeProgress, transcode, transcode_with_progress,
};
pub use request::{JobRequest, JobResult};
pub use utils::{format_bytes, format_duration, parse_ffmpeg_time};
