//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/ledger-finder/config.json`
//! - macOS: `~/Library/Application Support/ledger-finder/config.json`
//! - Windows: `%APPDATA%/ledger-finder/config.json`
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid
//! configuration.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::HttpConfig;
use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::{CustomNetwork, Network};
use crate::resolver::ResolverConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "ledger-finder";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// The explorer network lookups are sent to.
    #[serde(default)]
    pub network: Network,
    /// API key sent with every lookup, if the explorer requires one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Resolution policies.
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Named explorer deployments that `--network` can select.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            resolver: ResolverConfig::default(),
            custom_networks: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from the default location.
    ///
    /// Falls back to the default configuration if the file is missing or
    /// cannot be parsed.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            color_eyre::eyre::eyre!("Failed to read config '{}': {e}", path.display())
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Points lookups at a custom explorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or URL is invalid.
    pub fn use_custom_network(&mut self, name: &str, api_url: &str) -> Result<()> {
        let custom = CustomNetwork::new(name, api_url).map_err(|e| e.into_report())?;
        self.network = Network::Custom(custom);
        Ok(())
    }

    /// Selects a network by name: `LocalNet` or one of `custom_networks`.
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error naming the known networks if none matches.
    pub fn select_network(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(Network::LocalNet.as_str()) {
            self.network = Network::LocalNet;
            return Ok(());
        }

        let custom = self
            .custom_networks
            .iter()
            .find(|custom| custom.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "Unknown network '{name}'. Known networks: {}",
                    self.network_names().join(", ")
                )
            })?;
        self.network = Network::Custom(custom);
        Ok(())
    }

    /// Names of every selectable network, built-in first.
    #[must_use]
    pub fn network_names(&self) -> Vec<&str> {
        std::iter::once(Network::LocalNet.as_str())
            .chain(self.custom_networks.iter().map(|custom| custom.name.as_str()))
            .collect()
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.timeout_secs))
            .api_key(self.api_key.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
