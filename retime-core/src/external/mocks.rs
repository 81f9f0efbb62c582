// retime-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests only.

use super::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor, MediaInfo};
use crate::error::{CoreError, CoreResult, probe_error};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::collections::HashMap;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Bytes written to outputs created by `MockFfmpegSpawner`.
pub const MOCK_OUTPUT_CONTENT: &[u8] = b"mock retimed video";

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Rc<RefCell<Vec<FfmpegEvent>>>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
    waited: Rc<RefCell<bool>>,
}

impl MockFfmpegProcess {
    pub fn new(events: Vec<FfmpegEvent>, exit_code: i32) -> Self {
        Self {
            events_to_emit: Rc::new(RefCell::new(events)),
            // wait(2) status layout: exit code in the second byte
            exit_status: ExitStatus::from_raw(exit_code << 8),
            waited: Rc::new(RefCell::new(false)),
        }
    }

    /// Whether `wait` was called on this process (or a clone of it).
    pub fn was_waited(&self) -> bool {
        *self.waited.borrow()
    }
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let events = self.events_to_emit.borrow().clone();
        for event in events {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        *self.waited.borrow_mut() = true;
        Ok(self.exit_status)
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
    pub create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<MockFfmpegProcess>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    /// Expect a command matching `arg_pattern` that exits 0.
    pub fn add_success_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        create_dummy_output: bool,
    ) -> MockFfmpegProcess {
        let process = MockFfmpegProcess::new(events, 0);
        self.add_expectation(arg_pattern, Ok(process.clone()), create_dummy_output);
        process
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    /// Expect a command matching `arg_pattern` that exits with `exit_code`.
    pub fn add_exit_error_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        exit_code: i32,
    ) -> MockFfmpegProcess {
        let process = MockFfmpegProcess::new(events, exit_code);
        self.add_expectation(arg_pattern, Ok(process.clone()), false);
        process
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();

        let found_index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        let Some(index) = found_index else {
            log::error!("MockFfmpegSpawner: No expectation found for command args: {args:?}");
            panic!("MockFfmpegSpawner: No expectation found for command args: {args:?}");
        };

        let expectation = expectations.remove(index);
        log::info!(
            "MockFfmpegSpawner: Matched expectation with pattern '{}'",
            expectation.arg_pattern
        );

        let process = expectation.result?;
        if expectation.create_dummy_output {
            match args.last() {
                Some(output_path_str) => {
                    let output_path = PathBuf::from(output_path_str);
                    if let Err(e) = std::fs::write(&output_path, MOCK_OUTPUT_CONTENT) {
                        log::error!(
                            "MockFfmpegSpawner failed to create dummy output file {}: {e}",
                            output_path.display()
                        );
                    }
                }
                None => log::warn!(
                    "MockFfmpegSpawner couldn't find output path in args to create dummy file."
                ),
            }
        }
        Ok(process)
    }
}

/// Mock implementation of FfprobeExecutor.
///
/// Durations are keyed by path. Every call is recorded so tests can assert
/// which files were probed.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    durations: Rc<RefCell<HashMap<PathBuf, Result<f64, String>>>>,
    media_info: Rc<RefCell<HashMap<PathBuf, MediaInfo>>>,
    probed: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Duration returned for `path`.
    pub fn expect_duration(&self, path: &Path, duration: f64) {
        self.durations
            .borrow_mut()
            .insert(path.to_path_buf(), Ok(duration));
    }

    /// Probe failure with `reason` for `path`.
    pub fn expect_probe_failure(&self, path: &Path, reason: &str) {
        self.durations
            .borrow_mut()
            .insert(path.to_path_buf(), Err(reason.to_string()));
    }

    pub fn expect_media_info(&self, path: &Path, info: MediaInfo) {
        self.media_info
            .borrow_mut()
            .insert(path.to_path_buf(), info);
    }

    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        log::info!("MockFfprobeExecutor::probe_duration called for: {}", path.display());
        self.probed.borrow_mut().push(path.to_path_buf());
        match self.durations.borrow().get(path) {
            Some(Ok(duration)) => Ok(*duration),
            Some(Err(reason)) => Err(probe_error(path, reason.clone())),
            None => Err(probe_error(path, "MockFfprobeExecutor: no expectation set")),
        }
    }

    fn get_media_info(&self, path: &Path) -> CoreResult<MediaInfo> {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.media_info
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| probe_error(path, "MockFfprobeExecutor: no media info set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_prober_returns_expected_media_info() {
        let prober = MockFfprobeExecutor::new();
        let path = Path::new("clip.mp4");
        let info = MediaInfo {
            duration: 12.5,
            frame_rate: Some(25.0),
            ..MediaInfo::default()
        };
        prober.expect_media_info(path, info.clone());

        assert_eq!(prober.get_media_info(path).unwrap(), info);
        assert!(prober.get_media_info(Path::new("other.mp4")).is_err());
        assert_eq!(prober.probed_paths().len(), 2);
    }
}
