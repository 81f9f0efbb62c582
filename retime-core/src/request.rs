//! Job request and result types.
//!
//! A `JobRequest` is validated once when it is built and cannot be changed
//! afterwards; the pipeline trusts its invariants.

use crate::config::DEFAULT_TARGET_FPS;
use crate::error::{CoreError, CoreResult};
use crate::processing::duration::DurationCheck;
use crate::processing::filter::FrameRateFilter;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A validated request to convert one video to a new frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    input: PathBuf,
    target_fps: f64,
    interpolate: bool,
}

impl JobRequest {
    /// Validates and builds a request.
    ///
    /// Fails with `InvalidRequest` when `target_fps` is not a positive finite
    /// number and with `InputNotFound` when `input` is not an existing file.
    pub fn new(input: impl Into<PathBuf>, target_fps: f64, interpolate: bool) -> CoreResult<Self> {
        let input = input.into();

        if !target_fps.is_finite() || target_fps <= 0.0 {
            return Err(CoreError::InvalidRequest(format!(
                "target frame rate must be a positive number, got {target_fps}"
            )));
        }

        if !input.is_file() {
            return Err(CoreError::InputNotFound(input));
        }

        Ok(Self {
            input,
            target_fps,
            interpolate,
        })
    }

    /// Request with the default frame rate and no interpolation.
    pub fn with_defaults(input: impl Into<PathBuf>) -> CoreResult<Self> {
        Self::new(input, DEFAULT_TARGET_FPS, false)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    pub fn interpolate(&self) -> bool {
        self.interpolate
    }

    /// The ffmpeg video filter this request maps to.
    pub fn filter(&self) -> FrameRateFilter {
        FrameRateFilter::for_request(self.target_fps, self.interpolate)
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    /// Path of the produced video
    pub output_path: PathBuf,
    pub target_fps: f64,
    pub interpolated: bool,
    /// Size of the produced video in bytes
    pub output_size: u64,
    /// Input and output durations and whether they agree
    pub duration_check: DurationCheck,
}
