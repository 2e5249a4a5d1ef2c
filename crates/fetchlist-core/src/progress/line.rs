//! Single-line console status, redrawn in place with `\r`.

use super::ProgressObserver;
use indicatif::DecimalBytes;
use std::io::{self, Write};

/// Width blanked before each redraw so a shorter line fully covers a longer one.
const BLANK_WIDTH: usize = 35;

/// Status text for `total` bytes, e.g. `Downloading... 12.30 MB complete`.
pub fn render_status(total: u64) -> String {
    format!("Downloading... {} complete", DecimalBytes(total))
}

/// Writes `Downloading... <n> complete` over the previous status line.
pub struct LineProgress<W: Write> {
    out: W,
}

impl LineProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for LineProgress<W> {
    fn on_bytes(&mut self, _delta: u64, total: u64) {
        let _ = write!(
            self.out,
            "\r{:width$}\r{}",
            "",
            render_status(total),
            width = BLANK_WIDTH
        );
        let _ = self.out.flush();
    }

    fn on_finish(&mut self, _total: u64) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
