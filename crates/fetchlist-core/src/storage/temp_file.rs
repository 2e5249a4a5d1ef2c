//! Sequential writer for the in-flight file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Open temp file receiving the response body in order.
#[derive(Debug)]
pub struct TempFile {
    file: File,
    path: PathBuf,
    written: u64,
}

impl TempFile {
    /// Create (or truncate) the temp file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Append one body chunk.
    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and sync to disk, then release the handle.
    pub fn close(mut self) -> io::Result<ClosedTempFile> {
        self.file.flush()?;
        self.file.sync_all()?;
        drop(self.file);
        Ok(ClosedTempFile { path: self.path })
    }
}

/// A fully written temp file whose handle has been released.
#[derive(Debug)]
pub struct ClosedTempFile {
    path: PathBuf,
}

impl ClosedTempFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically rename onto `final_path`. On failure the temp file stays
    /// where it is and `final_path` is untouched.
    pub fn publish(self, final_path: &Path) -> io::Result<()> {
        std::fs::rename(&self.path, final_path)
    }
}
