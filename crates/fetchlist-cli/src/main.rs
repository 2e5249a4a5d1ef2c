use fetchlist_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Logs go to the state dir; fall back to stderr so a read-only home still works.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("fetchlist error: {:#}", err);
        std::process::exit(1);
    }
}
