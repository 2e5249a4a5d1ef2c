//! Progress reporting for a transfer.
//!
//! The downloader feeds every written chunk to a [`ProgressObserver`].
//! Observers are display-only: they return nothing and swallow their own
//! errors, so a broken console can never fail a transfer.

mod bar;
mod line;
mod log;

pub use bar::BarProgress;
pub use line::{render_status, LineProgress};
pub use log::LogProgress;

use crate::request::TransferRequest;
use serde::{Deserialize, Serialize};

/// Receives byte accounting for one transfer at a time.
pub trait ProgressObserver {
    /// Called once before the transfer starts.
    fn on_start(&mut self, _request: &TransferRequest) {}

    /// Called after every chunk is written. `total` is the cumulative count.
    fn on_bytes(&mut self, delta: u64, total: u64);

    /// Called once the body is fully on disk, before the rename.
    fn on_finish(&mut self, _total: u64) {}
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for Box<T> {
    fn on_start(&mut self, request: &TransferRequest) {
        (**self).on_start(request)
    }

    fn on_bytes(&mut self, delta: u64, total: u64) {
        (**self).on_bytes(delta, total)
    }

    fn on_finish(&mut self, total: u64) {
        (**self).on_finish(total)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_bytes(&mut self, _delta: u64, _total: u64) {}
}

/// Monotonic byte count for the transfer in flight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteCounter {
    total: u64,
}

impl ByteCounter {
    /// Adds `n` bytes and returns the new total.
    pub fn add(&mut self, n: u64) -> u64 {
        self.total = self.total.saturating_add(n);
        self.total
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// How progress is shown on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Carriage-return status line on stdout.
    #[default]
    Line,
    /// indicatif spinner with byte count and rate.
    Bar,
    /// tracing events only.
    Log,
    /// No progress output.
    None,
}

/// Builds the observer for `mode`.
pub fn observer_for(mode: ProgressMode) -> Box<dyn ProgressObserver> {
    match mode {
        ProgressMode::Line => Box::new(LineProgress::stdout()),
        ProgressMode::Bar => Box::new(BarProgress::new()),
        ProgressMode::Log => Box::new(LogProgress::default()),
        ProgressMode::None => Box::new(NoProgress),
    }
}
