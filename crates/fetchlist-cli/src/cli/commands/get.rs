//! `fetchlist get <url>` – download one URL.

use anyhow::{Context, Result};
use fetchlist_core::manifest;
use fetchlist_core::progress::observer_for;
use fetchlist_core::Downloader;
use std::path::Path;

use super::announce;
use crate::cli::Settings;

pub fn run_get(settings: &Settings, url: &str, output: Option<&Path>, cwd: &Path) -> Result<()> {
    let request = manifest::request_for_url(url, output, cwd)?;
    let downloader = Downloader::new(settings.downloader.clone());
    let mut observer = observer_for(settings.progress);

    println!("Download Started");
    announce(&mut std::io::stdout(), &request);
    let report = downloader
        .fetch(&request, observer.as_mut())
        .with_context(|| format!("download of {} failed", request.url()))?;
    println!("Download Finished: {} ({} bytes)", report.destination.display(), report.bytes);
    Ok(())
}
