//! Input/output duration comparison.
//!
//! A frame rate change should not change the running time. A mismatch beyond
//! the tolerance is reported but never fails a conversion.

use serde::Serialize;

/// Result of comparing the input and output durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationCheck {
    pub input_secs: f64,
    pub output_secs: f64,
    /// Absolute difference in seconds
    pub diff_secs: f64,
    pub tolerance_secs: f64,
    pub within_tolerance: bool,
}

/// Compares two durations. Differences equal to the tolerance pass.
#[must_use]
pub fn check_duration(input_secs: f64, output_secs: f64, tolerance_secs: f64) -> DurationCheck {
    let diff_secs = (input_secs - output_secs).abs();
    DurationCheck {
        input_secs,
        output_secs,
        diff_secs,
        tolerance_secs,
        within_tolerance: diff_secs <= tolerance_secs,
    }
}

impl DurationCheck {
    /// Logs the outcome: a warning when out of tolerance, info otherwise.
    pub fn log(&self) {
        if self.within_tolerance {
            log::info!("Video duration maintained successfully");
        } else {
            log::warn!(
                "Output duration differs from input by {:.2} seconds (tolerance {:.2}s)",
                self.diff_secs,
                self.tolerance_secs
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_durations_pass() {
        let check = check_duration(10.0, 10.04, 0.1);
        assert!(check.within_tolerance);
        assert!((check.diff_secs - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_mismatch_beyond_tolerance_fails_check() {
        let check = check_duration(10.0, 9.5, 0.1);
        assert!(!check.within_tolerance);
        assert!((check.diff_secs - 0.5).abs() < 1e-9);

        // Order does not matter
        assert_eq!(check_duration(9.5, 10.0, 0.1).diff_secs, check.diff_secs);
    }

    #[test]
    fn test_diff_equal_to_tolerance_passes() {
        assert!(check_duration(2.0, 1.5, 0.5).within_tolerance);
    }
}
