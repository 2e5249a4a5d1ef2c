//! `fetchlist batch` and `fetchlist pairs` – ordered multi-file downloads.

use anyhow::Result;
use fetchlist_core::batch::{run_batch, BatchReport};
use fetchlist_core::manifest;
use fetchlist_core::progress::observer_for;
use fetchlist_core::{Downloader, TransferRequest};
use std::path::Path;

use super::announce;
use crate::cli::Settings;

pub fn run_manifest(settings: &Settings, manifest_path: &Path, base_dir: &Path) -> Result<()> {
    let requests = manifest::load_manifest(manifest_path, base_dir)?;
    tracing::info!(
        manifest = %manifest_path.display(),
        count = requests.len(),
        "loaded manifest"
    );
    run_requests(settings, requests)
}

pub fn run_pairs(settings: &Settings, pairs: &[String], base_dir: &Path) -> Result<()> {
    let requests = pairs
        .iter()
        .map(|p| manifest::parse_pair(p, base_dir))
        .collect::<Result<Vec<_>, _>>()?;
    run_requests(settings, requests)
}

fn run_requests(settings: &Settings, requests: Vec<TransferRequest>) -> Result<()> {
    let downloader = Downloader::new(settings.downloader.clone());
    let mode = settings.progress;

    println!("Download Started");
    let report = run_batch(&downloader, requests, settings.policy, |req| {
        announce(&mut std::io::stdout(), req);
        observer_for(mode)
    });
    print_summary(&report);

    if !report.is_success() {
        let failed = report.failures().count();
        anyhow::bail!(
            "{} of {} download(s) failed, {} skipped",
            failed,
            report.outcomes.len(),
            report.skipped.len()
        );
    }
    println!("Download Finished");
    Ok(())
}

fn print_summary(report: &BatchReport) {
    for outcome in report.failures() {
        if let Err(e) = &outcome.result {
            eprintln!("failed: {}: {}", outcome.request, e);
        }
    }
    for request in &report.skipped {
        eprintln!("skipped: {}", request);
    }
    tracing::info!(
        succeeded = report.succeeded(),
        bytes = report.total_bytes(),
        "batch summary"
    );
}
