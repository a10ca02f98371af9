//! CLI argument definitions using clap.
//!
//! ```text
//! ledger-finder [OPTIONS] <TOKEN>      resolve a token
//! ledger-finder [OPTIONS] config       show (and optionally save) settings
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address (34 chars) or transaction id / block hash (64 hex chars)
    pub token: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options that override the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Network to search: LocalNet or a name from `custom_networks` in the
    /// config file
    #[arg(long, value_name = "NAME", env = "LEDGER_FINDER_NETWORK")]
    pub network: Option<String>,

    /// Explorer API base URL (overrides config file and --network)
    #[arg(long, env = "LEDGER_FINDER_URL")]
    pub url: Option<String>,

    /// Explorer API key (overrides config file)
    #[arg(long, env = "LEDGER_FINDER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Look hashes up as blocks before transactions
    #[arg(long)]
    pub block_first: bool,

    /// Report failed lookups instead of treating them as "not found"
    #[arg(long)]
    pub strict_transport: bool,

    /// Report unknown addresses as "not found" instead of invalid input
    #[arg(long)]
    pub split_not_found: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the effective configuration
    Config {
        /// Persist the effective configuration (including overrides)
        #[arg(long)]
        save: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn parses_token_with_overrides() {
        let args = Arguments::try_parse_from([
            "ledger-finder",
            "--url",
            "https://explorer.example.com/api",
            "--block-first",
            "--timeout",
            "5",
            "abc",
        ])
        .unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(
            args.common.url.as_deref(),
            Some("https://explorer.example.com/api")
        );
        assert!(args.common.block_first);
        assert_eq!(args.common.timeout, Some(5));
    }

    #[test]
    fn parses_config_subcommand() {
        let args = Arguments::try_parse_from(["ledger-finder", "config", "--save"]).unwrap();
        assert!(matches!(args.command, Some(Command::Config { save: true })));
        assert!(args.token.is_none());
    }

    #[test]
    fn parses_network_name() {
        let args =
            Arguments::try_parse_from(["ledger-finder", "--network", "LocalNet", "abc"]).unwrap();
        assert_eq!(args.common.network.as_deref(), Some("LocalNet"));
        assert!(args.common.url.is_none());
    }
}
