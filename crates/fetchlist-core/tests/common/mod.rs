#![allow(dead_code)]

pub mod test_server;

use fetchlist_core::ProgressObserver;

/// Observer that records every callback for assertions.
#[derive(Debug, Default)]
pub struct Recorder {
    pub started: usize,
    pub deltas: Vec<u64>,
    pub totals: Vec<u64>,
    pub finished: Option<u64>,
}

impl Recorder {
    pub fn last_total(&self) -> u64 {
        self.totals.last().copied().unwrap_or(0)
    }
}

impl ProgressObserver for Recorder {
    fn on_start(&mut self, _request: &fetchlist_core::TransferRequest) {
        self.started += 1;
    }

    fn on_bytes(&mut self, delta: u64, total: u64) {
        self.deltas.push(delta);
        self.totals.push(total);
    }

    fn on_finish(&mut self, total: u64) {
        self.finished = Some(total);
    }
}

/// Deterministic, non-repeating-looking test payload.
pub fn payload(len: usize) -> Vec<u8> {
    (0u8..251).cycle().take(len).collect()
}
