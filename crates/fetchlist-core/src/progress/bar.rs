//! indicatif spinner showing bytes received and rate.

use super::ProgressObserver;
use crate::request::TransferRequest;
use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str =
    "{spinner:.blue} {prefix:.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {msg}";

fn spinner_style() -> Option<ProgressStyle> {
    ProgressStyle::with_template(SPINNER_TEMPLATE).ok()
}

/// Content length is unknown up front, so this is always a spinner.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Wrap an existing bar (e.g. `ProgressBar::hidden()`).
    pub fn with_bar(bar: ProgressBar) -> Self {
        let bar = match spinner_style() {
            Some(style) => bar.with_style(style),
            None => bar,
        };
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&mut self, request: &TransferRequest) {
        self.bar.set_prefix(request.to_string());
        self.bar.set_position(0);
    }

    fn on_bytes(&mut self, _delta: u64, total: u64) {
        self.bar.set_position(total);
    }

    fn on_finish(&mut self, total: u64) {
        self.bar.set_position(total);
        self.bar.finish_with_message("done");
    }
}
