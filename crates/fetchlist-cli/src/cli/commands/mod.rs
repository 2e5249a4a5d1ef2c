//! CLI command handlers.

mod batch;
mod completions;
mod get;

pub use batch::{run_manifest, run_pairs};
pub use completions::run_completions;
pub use get::run_get;

use fetchlist_core::TransferRequest;
use std::io::Write;

/// Console heading before each transfer: the label, or the destination path.
pub(crate) fn announce<W: Write>(out: &mut W, request: &TransferRequest) {
    let _ = writeln!(out, "{}", request);
    let _ = out.flush();
}
