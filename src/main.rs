use std::process::ExitCode;

use clap::Parser;
use ledger_finder::cli::{self, Arguments, ExitStatus};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = color_eyre::install() {
        eprintln!("Error: {err}");
        return ExitStatus::Error.into();
    }
    cli::init_tracing(args.common.verbose);

    match cli::run(args).await {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitStatus::Error.into()
        }
    }
}
