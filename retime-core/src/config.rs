// ============================================================================
// retime-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines where converted files are written and how strictly the
// output duration is compared against the input.
//
// KEY COMPONENTS:
// - CoreConfig: Main configuration structure for the library
// - OutputNaming: Fixed or per-run unique output file names
// - Default constants shared with the CLI

use crate::error::{CoreError, CoreResult};
use crate::temp_files;
use std::path::{Path, PathBuf};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Frame rate used when the caller does not ask for one.
pub const DEFAULT_TARGET_FPS: f64 = 24.0;

/// Allowed difference between input and output duration before a warning.
pub const DEFAULT_DURATION_TOLERANCE_SECS: f64 = 0.1;

/// File name written on every run with `OutputNaming::Fixed`.
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.mp4";

/// Directory under the system temp dir used when no output dir is given.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "retime_output";

/// Prefix for names generated by `OutputNaming::Unique`.
pub const UNIQUE_OUTPUT_PREFIX: &str = "retimed";

/// Container extension for generated output names.
pub const OUTPUT_EXTENSION: &str = "mp4";

// ============================================================================
// OUTPUT NAMING
// ============================================================================

/// How the output file inside `CoreConfig::output_dir` is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNaming {
    /// Always the same name; each run overwrites the previous result.
    Fixed(String),
    /// A fresh random name per run, reserved on disk before ffmpeg starts.
    Unique,
}

impl Default for OutputNaming {
    fn default() -> Self {
        OutputNaming::Fixed(DEFAULT_OUTPUT_FILENAME.to_string())
    }
}

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Configuration for a single conversion.
///
/// # Examples
///
/// ```rust
/// use retime_core::config::{CoreConfig, OutputNaming};
/// use std::path::PathBuf;
///
/// let mut config = CoreConfig::new(PathBuf::from("/tmp/retime_out"));
/// config.output_naming = OutputNaming::Unique;
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory the output file is written into (created if absent)
    pub output_dir: PathBuf,

    /// Naming policy for the output file
    pub output_naming: OutputNaming,

    /// Duration difference in seconds tolerated without a warning
    pub duration_tolerance_secs: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_OUTPUT_DIR_NAME))
    }
}

impl CoreConfig {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            output_naming: OutputNaming::default(),
            duration_tolerance_secs: DEFAULT_DURATION_TOLERANCE_SECS,
        }
    }

    /// Checks that the configuration can be used for a conversion.
    pub fn validate(&self) -> CoreResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::InvalidConfig(
                "output directory must not be empty".to_string(),
            ));
        }

        if let OutputNaming::Fixed(name) = &self.output_naming {
            let as_path = Path::new(name);
            let is_plain_name = as_path.file_name().is_some_and(|f| f == as_path.as_os_str());
            if name.is_empty() || !is_plain_name {
                return Err(CoreError::InvalidConfig(format!(
                    "output name '{name}' must be a plain file name"
                )));
            }
        }

        if !self.duration_tolerance_secs.is_finite() || self.duration_tolerance_secs < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "duration tolerance must be a non-negative number, got {}",
                self.duration_tolerance_secs
            )));
        }

        Ok(())
    }

    /// Resolves the output file path for one run.
    ///
    /// `Unique` naming creates an empty placeholder file under a new random
    /// name on every call (and the output directory with it).
    pub fn resolve_output_path(&self) -> CoreResult<PathBuf> {
        match &self.output_naming {
            OutputNaming::Fixed(name) => Ok(self.output_dir.join(name)),
            OutputNaming::Unique => temp_files::reserve_output_file(
                &self.output_dir,
                UNIQUE_OUTPUT_PREFIX,
                OUTPUT_EXTENSION,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_output_name() {
        let config = CoreConfig::default();
        assert!(config.output_dir.ends_with(DEFAULT_OUTPUT_DIR_NAME));
        assert_eq!(config.duration_tolerance_secs, DEFAULT_DURATION_TOLERANCE_SECS);
        assert_eq!(
            config.resolve_output_path().unwrap(),
            config.output_dir.join(DEFAULT_OUTPUT_FILENAME)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unique_naming_yields_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CoreConfig::new(dir.path().join("out"));
        config.output_naming = OutputNaming::Unique;

        let first = config.resolve_output_path().unwrap();
        let second = config.resolve_output_path().unwrap();
        assert_ne!(first, second);
        assert_eq!(first.parent(), Some(config.output_dir.as_path()));
        assert!(first.to_string_lossy().ends_with(".mp4"));
        assert!(first.is_file());
    }

    #[test]
    fn test_validate_rejects_nested_output_name() {
        let mut config = CoreConfig::new(PathBuf::from("/tmp/out"));
        config.output_naming = OutputNaming::Fixed("../escape.mp4".to_string());
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));

        config.output_naming = OutputNaming::Fixed(String::new());
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let mut config = CoreConfig::new(PathBuf::from("/tmp/out"));
        config.duration_tolerance_secs = -0.5;
        assert!(config.validate().is_err());

        config.duration_tolerance_secs = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = CoreConfig::new(PathBuf::new());
        assert!(config.validate().is_err());
    }
}
