//! Frame rate conversion logic and orchestration.
//!
//! This module organizes the conversion steps into submodules and exposes the
//! primary entry points for running a conversion.

/// Video filter expression selection
pub mod filter;

/// Input/output duration comparison
pub mod duration;

/// Probe, transcode and verify pipeline
pub mod transcode;

pub use duration::{DurationCheck, check_duration};
pub use filter::FrameRateFilter;
pub use transcode::{TranscodeProgress, transcode, transcode_with_progress};
