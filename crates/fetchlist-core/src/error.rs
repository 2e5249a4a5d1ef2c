//! Failure taxonomy for a single transfer.
//!
//! Every variant names the step that failed. Nothing is retried; the caller
//! sees the error exactly once.

use crate::request::RequestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse class of a transfer failure. Both classes are terminal for the
/// transfer they occur in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Creating, writing, closing or renaming a local file failed.
    LocalIo,
    /// Connecting, or reading the full response, failed.
    Network,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid transfer request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("cannot create temp file {}: {source}", .path.display())]
    CreateTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    #[error("write to {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot close {}: {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidRequest(e) => e.kind(),
            FetchError::Network { .. } | FetchError::HttpStatus { .. } => ErrorKind::Network,
            FetchError::CreateTemp { .. }
            | FetchError::Write { .. }
            | FetchError::Close { .. }
            | FetchError::Rename { .. } => ErrorKind::LocalIo,
        }
    }

    /// True when the failure happened before the temp file existed.
    pub(crate) fn before_temp_created(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidRequest(_) | FetchError::CreateTemp { .. }
        )
    }
}
