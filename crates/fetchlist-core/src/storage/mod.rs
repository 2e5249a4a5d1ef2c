//! Temp-file lifecycle for a single transfer.
//!
//! The body is streamed into `<destination><suffix>`. Only a fully written,
//! synced temp file is ever renamed onto the destination, so the destination
//! path never holds partial data.

mod temp_file;

pub use temp_file::{ClosedTempFile, TempFile};

use std::path::{Path, PathBuf};

/// Default suffix for in-flight files.
pub const DEFAULT_TEMP_SUFFIX: &str = ".tmp";

/// Appends `suffix` to the final path (e.g. `go.zip` → `go.zip.tmp`).
pub fn temp_path(final_path: &Path, suffix: &str) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(suffix);
    PathBuf::from(o)
}

/// Best-effort removal of a leftover temp file.
pub fn discard(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed temp file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove temp file"),
    }
}
