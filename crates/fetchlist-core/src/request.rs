//! Transfer requests: one (destination, URL) pair per download.

use crate::error::ErrorKind;
use crate::storage;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("destination path is empty")]
    EmptyDestination,

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme {scheme:?} in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
}

impl RequestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::EmptyDestination => ErrorKind::LocalIo,
            RequestError::InvalidUrl { .. } | RequestError::UnsupportedScheme { .. } => {
                ErrorKind::Network
            }
        }
    }
}

/// A validated, immutable download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    destination: PathBuf,
    url: String,
    label: Option<String>,
}

impl TransferRequest {
    /// Builds a request. The destination must be non-empty and the URL must
    /// parse with an `http` or `https` scheme.
    pub fn new(destination: impl Into<PathBuf>, url: impl Into<String>) -> Result<Self, RequestError> {
        let destination = destination.into();
        let url = url.into();
        if destination.as_os_str().is_empty() {
            return Err(RequestError::EmptyDestination);
        }
        let parsed = url::Url::parse(&url).map_err(|source| RequestError::InvalidUrl {
            url: url.clone(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(RequestError::UnsupportedScheme {
                    scheme: other.to_string(),
                    url,
                })
            }
        }
        Ok(Self {
            destination,
            url,
            label: None,
        })
    }

    /// Attaches a human-readable heading shown before the transfer starts.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Path of the in-flight file for this request.
    pub fn temp_path(&self, suffix: &str) -> PathBuf {
        storage::temp_path(&self.destination, suffix)
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "{}", self.destination.display()),
        }
    }
}
