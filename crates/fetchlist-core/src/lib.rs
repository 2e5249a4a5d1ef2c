pub mod config;
pub mod logging;

pub mod batch;
pub mod downloader;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod request;
pub mod storage;
pub mod url_model;

pub use downloader::{fetch, Downloader, DownloaderOptions, FetchReport};
pub use error::{ErrorKind, FetchError};
pub use progress::{ProgressMode, ProgressObserver};
pub use request::TransferRequest;
