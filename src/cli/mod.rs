//! Command-line interface.
//!
//! - `args`: clap argument definitions
//! - `run`: command dispatch and process exit status
//! - `report`: text and JSON rendering of outcomes

mod args;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use report::{render_json, render_text};
pub use run::{ExitStatus, run};

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug logs
/// for this crate and everything else stays at `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "warn,ledger_finder=debug"
        } else {
            "warn"
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
