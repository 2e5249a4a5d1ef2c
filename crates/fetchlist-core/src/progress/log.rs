//! Progress as structured tracing events instead of console output.

use super::ProgressObserver;
use crate::request::TransferRequest;

#[derive(Debug, Default)]
pub struct LogProgress {
    url: String,
    chunks: u64,
}

impl LogProgress {
    pub fn chunks(&self) -> u64 {
        self.chunks
    }
}

impl ProgressObserver for LogProgress {
    fn on_start(&mut self, request: &TransferRequest) {
        self.url = request.url().to_string();
        self.chunks = 0;
    }

    fn on_bytes(&mut self, delta: u64, total: u64) {
        self.chunks += 1;
        tracing::trace!(url = %self.url, delta, total, "chunk written");
    }

    fn on_finish(&mut self, total: u64) {
        tracing::info!(url = %self.url, bytes = total, chunks = self.chunks, "body received");
    }
}
