//! Video filter expressions for frame rate conversion.
//!
//! Plain conversion uses ffmpeg's `fps` filter, which drops or duplicates
//! frames. Interpolated conversion uses `minterpolate` in motion compensated
//! mode with adaptive overlapped block motion compensation and variable size
//! block motion compensation.

use std::fmt;

/// Motion interpolation mode: motion compensated interpolation.
const MI_MODE: &str = "mci";
/// Motion compensation mode: adaptive overlapped block motion compensation.
const MC_MODE: &str = "aobmc";
/// Variable size block motion compensation on.
const VSBMC: u8 = 1;

/// The `-filter:v` expression for a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameRateFilter {
    /// Frame dropping/duplication to reach `fps`.
    Fps { fps: f64 },
    /// Motion compensated interpolation to reach `fps`.
    MotionInterpolate { fps: f64 },
}

impl FrameRateFilter {
    #[must_use]
    pub fn for_request(fps: f64, interpolate: bool) -> Self {
        if interpolate {
            FrameRateFilter::MotionInterpolate { fps }
        } else {
            FrameRateFilter::Fps { fps }
        }
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        match *self {
            FrameRateFilter::Fps { fps } | FrameRateFilter::MotionInterpolate { fps } => fps,
        }
    }

    #[must_use]
    pub fn is_interpolating(&self) -> bool {
        matches!(self, FrameRateFilter::MotionInterpolate { .. })
    }

    /// Renders the filter as passed to ffmpeg.
    #[must_use]
    pub fn to_filter_string(&self) -> String {
        match *self {
            FrameRateFilter::Fps { fps } => format!("fps=fps={fps}"),
            FrameRateFilter::MotionInterpolate { fps } => format!(
                "minterpolate='mi_mode={MI_MODE}:mc_mode={MC_MODE}:vsbmc={VSBMC}:fps={fps}'"
            ),
        }
    }
}

impl fmt::Display for FrameRateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filter_string())
    }
}
