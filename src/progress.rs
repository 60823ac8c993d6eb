use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use codestat_domain::{model::AggregationSnapshot, value_objects::FilePath};
use codestat_ports::ProgressSink;
use codestat_shared_kernel::Result;

/// Terminal spinner on stderr showing the phase and the number of files seen.
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg} ({pos} files)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn files_seen(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SpinnerProgress {
    fn on_progress(&self, message: &str) -> Result<()> {
        self.bar.set_message(message.to_string());
        Ok(())
    }

    fn on_file(&self, _path: &FilePath) -> Result<()> {
        self.bar.inc(1);
        Ok(())
    }

    fn on_complete(&self, _snapshot: &AggregationSnapshot) -> Result<()> {
        self.bar.finish_and_clear();
        Ok(())
    }
}

// Cancelled and failed runs never reach on_complete.
impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
