//! CLI for fetchlist.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fetchlist_core::batch::BatchPolicy;
use fetchlist_core::config::{self, FetchConfig};
use fetchlist_core::{DownloaderOptions, ProgressMode};
use std::path::PathBuf;

use commands::{run_completions, run_get, run_manifest, run_pairs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fetchlist")]
#[command(about = "Download a list of files over HTTP(S) with live progress", long_about = None)]
pub struct Cli {
    /// Progress display (overrides `progress` in config.toml).
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub progress: Option<ProgressArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressArg {
    Line,
    Bar,
    Log,
    None,
}

impl From<ProgressArg> for ProgressMode {
    fn from(arg: ProgressArg) -> Self {
        match arg {
            ProgressArg::Line => ProgressMode::Line,
            ProgressArg::Bar => ProgressMode::Bar,
            ProgressArg::Log => ProgressMode::Log,
            ProgressArg::None => ProgressMode::None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a single URL.
    Get {
        /// Direct HTTP/HTTPS URL to download.
        url: String,
        /// Destination path (default: last segment of the URL path).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Delete the temp file if the transfer fails.
        #[arg(long)]
        cleanup_temp: bool,
    },

    /// Download every entry of a TOML manifest, in order.
    Batch {
        /// Path to the manifest (`[[download]]` tables with `path` and `url`).
        manifest: PathBuf,
        /// Directory that relative manifest paths resolve against (default: current dir).
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Download `PATH=URL` pairs given on the command line, in order.
    Pairs {
        #[arg(required = true, value_name = "PATH=URL")]
        pairs: Vec<String>,
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Print shell completions to stdout.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct BatchArgs {
    /// Continue with the remaining downloads after a failure.
    #[arg(long)]
    pub keep_going: bool,
    /// Delete the temp file of a failed transfer.
    #[arg(long)]
    pub cleanup_temp: bool,
}

/// Effective settings after merging config.toml with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub downloader: DownloaderOptions,
    pub progress: ProgressMode,
    pub policy: BatchPolicy,
}

impl Settings {
    pub fn resolve(
        cfg: &FetchConfig,
        progress: Option<ProgressArg>,
        keep_going: bool,
        cleanup_temp: bool,
    ) -> Self {
        let mut downloader = DownloaderOptions::from(cfg);
        downloader.cleanup_temp_on_error |= cleanup_temp;
        let policy = if keep_going {
            BatchPolicy::KeepGoing
        } else {
            BatchPolicy::from_stop_flag(cfg.stop_on_first_error)
        };
        Self {
            downloader,
            progress: progress.map(ProgressMode::from).unwrap_or(cfg.progress),
            policy,
        }
    }
}

/// Loads config.toml and the working directory that relative paths resolve against.
fn load_context() -> Result<(FetchConfig, PathBuf)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let cwd = std::env::current_dir()?;
    Ok((cfg, cwd))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                url,
                output,
                cleanup_temp,
            } => {
                let (cfg, cwd) = load_context()?;
                let settings = Settings::resolve(&cfg, cli.progress, false, cleanup_temp);
                run_get(&settings, &url, output.as_deref(), &cwd)?;
            }
            CliCommand::Batch {
                manifest,
                output_dir,
                batch,
            } => {
                let (cfg, cwd) = load_context()?;
                let settings =
                    Settings::resolve(&cfg, cli.progress, batch.keep_going, batch.cleanup_temp);
                let base = output_dir.unwrap_or(cwd);
                run_manifest(&settings, &manifest, &base)?;
            }
            CliCommand::Pairs { pairs, batch } => {
                let (cfg, cwd) = load_context()?;
                let settings =
                    Settings::resolve(&cfg, cli.progress, batch.keep_going, batch.cleanup_temp);
                run_pairs(&settings, &pairs, &cwd)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
