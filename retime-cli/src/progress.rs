// ============================================================================
// retime-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Terminal progress bar for a running conversion
//
// Fed by the TranscodeProgress callbacks of retime-core. indicatif hides the
// bar on its own when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use retime_core::{TranscodeProgress, format_duration};

const PROGRESS_TEMPLATE: &str = "{spinner} [{bar:40}] {pos:>3}% {msg}";

/// Progress bar state for one conversion; a no-op when disabled.
#[derive(Clone, Default)]
pub struct CliProgress {
    bar: Option<ProgressBar>,
}

impl CliProgress {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::from_bar(ProgressBar::new(100))
        } else {
            Self::default()
        }
    }

    /// Wraps an existing bar, applying the retime style.
    pub fn from_bar(bar: ProgressBar) -> Self {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar: Some(bar) }
    }

    pub fn update(&self, progress: &TranscodeProgress) {
        if let Some(bar) = &self.bar {
            bar.set_position(progress.percent.round() as u64);
            bar.set_message(format!(
                "{} / {}  {:.1} fps  {:.2}x",
                format_duration(progress.current_secs),
                format_duration(progress.total_secs),
                progress.fps,
                progress.speed
            ));
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
