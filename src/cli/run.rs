//! Command dispatch for the ledger-finder CLI.

use std::process::ExitCode;

use color_eyre::Result;
use color_eyre::eyre::eyre;

use super::args::{Arguments, Command, CommonArgs};
use super::report::{render_json, render_text};
use crate::client::ExplorerClient;
use crate::config::AppConfig;
use crate::domain::{FinderError, ResolutionOutcome};
use crate::resolver::{HashPrecedence, Resolver, TransportPolicy};

/// Process exit status. The discriminant is the exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// The token resolved to an entity.
    Success = 0,
    /// The search ran but resolved nothing.
    Failure = 1,
    /// The search could not run at all.
    Error = 2,
}

impl ExitStatus {
    fn of(outcome: &ResolutionOutcome) -> Self {
        if outcome.is_resolved() {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the HTTP
/// client cannot be built. An unresolved search is not an error; it is
/// reported through [`ExitStatus::Failure`].
pub async fn run(args: Arguments) -> Result<ExitStatus> {
    let Arguments {
        command,
        token,
        common,
    } = args;
    let config = effective_config(&common)?;

    match command {
        Some(Command::Config { save }) => show_config(&common, &config, save),
        None => {
            let token = token
                .ok_or_else(|| eyre!("No search token provided. Use --help to see usage."))?;
            search(&config, &token, common.json).await
        }
    }
}

/// Loads the configuration and applies command-line overrides.
pub(crate) fn effective_config(common: &CommonArgs) -> Result<AppConfig> {
    let mut config = match &common.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    if let Some(name) = &common.network {
        config.select_network(name)?;
    }
    if let Some(url) = &common.url {
        config.use_custom_network("Custom", url)?;
    }
    if let Some(api_key) = &common.api_key {
        config.api_key = Some(api_key.clone());
    }
    if let Some(timeout) = common.timeout {
        config.timeout_secs = timeout;
    }
    if common.block_first {
        config.resolver.hash_precedence = HashPrecedence::BlockFirst;
    }
    if common.strict_transport {
        config.resolver.transport_policy = TransportPolicy::Propagate;
    }
    if common.split_not_found {
        config.resolver.reject_unknown_address = false;
    }

    Ok(config)
}

async fn search(config: &AppConfig, token: &str, json: bool) -> Result<ExitStatus> {
    let client = ExplorerClient::with_config(config.network.clone(), config.http_config())
        .map_err(FinderError::into_report)?;
    let resolver = Resolver::with_config(client, config.resolver);

    tracing::info!("Searching {} for '{token}'", resolver.lookup().network());
    let outcome = resolver.resolve(token).await;

    if json {
        println!("{}", render_json(token, &outcome)?);
    } else {
        println!("{}", render_text(token, &outcome));
    }

    Ok(ExitStatus::of(&outcome))
}

fn show_config(common: &CommonArgs, config: &AppConfig, save: bool) -> Result<ExitStatus> {
    let path = match &common.config {
        Some(path) => path.clone(),
        None => AppConfig::config_path()?,
    };

    if save {
        config.save_to(&path)?;
        println!("Saved configuration to {}", path.display());
    } else {
        println!("Config file: {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(ExitStatus::Success)
}
