//! Sources of transfer requests: TOML manifests, `PATH=URL` pairs, bare URLs.
//!
//! Manifest format:
//!
//! ```toml
//! [[download]]
//! label = "Go, Golang"
//! path = "go.zip"
//! url = "https://dl.google.com/go/go1.11.2.windows-amd64.zip"
//! ```

use crate::request::{RequestError, TransferRequest};
use crate::url_model;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("manifest lists no downloads")]
    Empty,

    #[error("download #{index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: RequestError,
    },

    #[error("expected PATH=URL, got {0:?}")]
    MalformedPair(String),

    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default, rename = "download")]
    downloads: Vec<ManifestEntry>,
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Parses manifest text; relative paths resolve against `base_dir`.
/// Order of `[[download]]` tables is preserved.
pub fn parse_manifest(text: &str, base_dir: &Path) -> Result<Vec<TransferRequest>, ManifestError> {
    let file: ManifestFile = toml::from_str(text)?;
    if file.downloads.is_empty() {
        return Err(ManifestError::Empty);
    }
    file.downloads
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let request = TransferRequest::new(resolve(base_dir, &entry.path), entry.url)
                .map_err(|source| ManifestError::Entry {
                    index: i + 1,
                    source,
                })?;
            Ok(match entry.label {
                Some(label) => request.with_label(label),
                None => request,
            })
        })
        .collect()
}

pub fn load_manifest(path: &Path, base_dir: &Path) -> Result<Vec<TransferRequest>, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&text, base_dir)
}

/// Parses `PATH=URL`. Splits at the first `=`, so query strings in the URL survive.
pub fn parse_pair(pair: &str, base_dir: &Path) -> Result<TransferRequest, ManifestError> {
    let (path, url) = pair
        .split_once('=')
        .ok_or_else(|| ManifestError::MalformedPair(pair.to_string()))?;
    let (path, url) = (path.trim(), url.trim());
    if path.is_empty() || url.is_empty() {
        return Err(ManifestError::MalformedPair(pair.to_string()));
    }
    Ok(TransferRequest::new(resolve(base_dir, Path::new(path)), url)?)
}

/// Request for a single URL; without `output` the filename comes from the URL path.
pub fn request_for_url(
    url: &str,
    output: Option<&Path>,
    base_dir: &Path,
) -> Result<TransferRequest, ManifestError> {
    let path = match output {
        Some(p) => resolve(base_dir, p),
        None => base_dir.join(url_model::derive_filename(url)),
    };
    Ok(TransferRequest::new(path, url)?)
}
