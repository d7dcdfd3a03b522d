use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner tick interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with rendered output on stdout.
/// Uses an indicatif spinner while a remote lookup is loading.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_loading(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);

        let mut slot = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = slot.replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn finish_loading(&self, message: Option<&str>) {
        let mut slot = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
        if let Some(msg) = message {
            eprintln!("{}", msg);
        }
    }
}
