//! Sequential batch runner over an ordered list of transfer requests.
//!
//! Transfers run one at a time, in order. Each one yields its own outcome;
//! the policy decides whether a failure ends the batch.

use crate::downloader::{Downloader, FetchReport};
use crate::error::FetchError;
use crate::progress::ProgressObserver;
use crate::request::TransferRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failure; later requests are reported as skipped.
    #[default]
    StopOnFirstError,
    /// Attempt every request regardless of earlier failures.
    KeepGoing,
}

impl BatchPolicy {
    pub fn from_stop_flag(stop_on_first_error: bool) -> Self {
        if stop_on_first_error {
            BatchPolicy::StopOnFirstError
        } else {
            BatchPolicy::KeepGoing
        }
    }
}

#[derive(Debug)]
pub struct TransferOutcome {
    pub request: TransferRequest,
    pub result: Result<FetchReport, FetchError>,
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per attempted request, in request order.
    pub outcomes: Vec<TransferOutcome>,
    /// Requests never attempted because the batch stopped early.
    pub skipped: Vec<TransferRequest>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.outcomes.iter().all(TransferOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|r| r.bytes)
            .sum()
    }
}

/// Runs `requests` in order. `make_observer` supplies a fresh observer per transfer.
pub fn run_batch<F>(
    downloader: &Downloader,
    requests: Vec<TransferRequest>,
    policy: BatchPolicy,
    mut make_observer: F,
) -> BatchReport
where
    F: FnMut(&TransferRequest) -> Box<dyn ProgressObserver>,
{
    let mut report = BatchReport::default();
    let mut pending = requests.into_iter();

    while let Some(request) = pending.next() {
        let mut observer = make_observer(&request);
        let result = downloader.fetch(&request, observer.as_mut());
        let failed = result.is_err();
        report.outcomes.push(TransferOutcome { request, result });

        if failed && policy == BatchPolicy::StopOnFirstError {
            report.skipped.extend(pending.by_ref());
            break;
        }
    }

    tracing::debug!(
        attempted = report.outcomes.len(),
        succeeded = report.succeeded(),
        skipped = report.skipped.len(),
        "batch finished"
    );
    report
}
