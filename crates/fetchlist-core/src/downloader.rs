//! Single-stream HTTP GET downloader.
//!
//! Streams the response body into `<destination><suffix>`, reporting every
//! chunk to a [`ProgressObserver`], then publishes the file with one atomic
//! rename. The destination is never written any other way.

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::progress::{ByteCounter, ProgressObserver};
use crate::request::TransferRequest;
use crate::storage::{self, TempFile};
use std::io;
use std::path::{Path, PathBuf};

/// Redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderOptions {
    /// Suffix appended to the destination for the in-flight file.
    pub temp_suffix: String,
    pub max_redirects: u32,
    /// Remove the temp file when a transfer fails. Off by default: the
    /// partial file is left for inspection.
    pub cleanup_temp_on_error: bool,
}

impl Default for DownloaderOptions {
    fn default() -> Self {
        Self {
            temp_suffix: storage::DEFAULT_TEMP_SUFFIX.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            cleanup_temp_on_error: false,
        }
    }
}

impl From<&FetchConfig> for DownloaderOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            temp_suffix: cfg.temp_suffix.clone(),
            max_redirects: cfg.max_redirects,
            cleanup_temp_on_error: cfg.cleanup_temp_on_error,
        }
    }
}

/// Result of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub destination: PathBuf,
    /// Bytes received; equals the length of the published file.
    pub bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Downloader {
    options: DownloaderOptions,
}

impl Downloader {
    pub fn new(options: DownloaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DownloaderOptions {
        &self.options
    }

    /// Downloads `request.url()` to `request.destination()`.
    ///
    /// The temp file is created before any network activity. On success the
    /// destination holds exactly the received bytes; on failure it is left as
    /// it was before the call.
    pub fn fetch(
        &self,
        request: &TransferRequest,
        observer: &mut dyn ProgressObserver,
    ) -> Result<FetchReport, FetchError> {
        let temp_path = request.temp_path(&self.options.temp_suffix);
        tracing::info!(
            url = request.url(),
            path = %request.destination().display(),
            "transfer started"
        );
        observer.on_start(request);

        let result = self.transfer(request, &temp_path, observer);
        match &result {
            Ok(report) => tracing::info!(
                url = request.url(),
                path = %report.destination.display(),
                bytes = report.bytes,
                "transfer completed"
            ),
            Err(e) => {
                tracing::warn!(
                    url = request.url(),
                    path = %request.destination().display(),
                    error = %e,
                    "transfer failed"
                );
                if self.options.cleanup_temp_on_error && !e.before_temp_created() {
                    storage::discard(&temp_path);
                }
            }
        }
        result
    }

    fn transfer(
        &self,
        request: &TransferRequest,
        temp_path: &Path,
        observer: &mut dyn ProgressObserver,
    ) -> Result<FetchReport, FetchError> {
        let mut temp = TempFile::create(temp_path).map_err(|source| FetchError::CreateTemp {
            path: temp_path.to_path_buf(),
            source,
        })?;

        let url = request.url();
        let network = |source: curl::Error| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(network)?;
        easy.follow_location(true).map_err(network)?;
        easy.max_redirections(self.options.max_redirects)
            .map_err(network)?;
        // Error bodies (>= 400) never reach the write callback.
        easy.fail_on_error(true).map_err(network)?;

        let mut counter = ByteCounter::default();
        let mut write_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    if let Err(e) = temp.write_chunk(data) {
                        write_error = Some(e);
                        // Short count makes libcurl abort with a write error.
                        return Ok(0);
                    }
                    let total = counter.add(data.len() as u64);
                    observer.on_bytes(data.len() as u64, total);
                    Ok(data.len())
                })
                .map_err(network)?;
            transfer.perform()
        };

        if let Some(source) = write_error {
            return Err(FetchError::Write {
                path: temp_path.to_path_buf(),
                source,
            });
        }
        if let Err(source) = performed {
            if source.is_http_returned_error() {
                return Err(FetchError::HttpStatus {
                    url: url.to_string(),
                    status: easy.response_code().unwrap_or(0),
                });
            }
            return Err(network(source));
        }
        let status = easy.response_code().map_err(network)?;
        if !(200..300).contains(&status) {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        // Response handle is released before the file handle.
        drop(easy);
        let closed = temp.close().map_err(|source| FetchError::Close {
            path: temp_path.to_path_buf(),
            source,
        })?;

        let total = counter.total();
        observer.on_finish(total);

        let destination = request.destination().to_path_buf();
        closed
            .publish(&destination)
            .map_err(|source| FetchError::Rename {
                from: temp_path.to_path_buf(),
                to: destination.clone(),
                source,
            })?;

        Ok(FetchReport {
            destination,
            bytes: total,
        })
    }
}

/// Downloads `url` to `destination` with default options.
pub fn fetch(
    destination: impl Into<PathBuf>,
    url: &str,
    observer: &mut dyn ProgressObserver,
) -> Result<FetchReport, FetchError> {
    let request = TransferRequest::new(destination, url)?;
    Downloader::default().fetch(&request, observer)
}
