//! Explorer network configuration.
//!
//! A network is the base URL of a block-explorer REST API. Entity lookups are
//! issued against `{api_url}/{addresses|transactions|blocks}/{token}`.

use serde::{Deserialize, Serialize};

use super::{EntityKind, FinderError};

// ============================================================================
// Constants
// ============================================================================

/// API base URL of an explorer server running on the local machine.
pub const LOCALNET_API_URL: &str = "http://localhost:9000/api";

// ============================================================================
// Network Configuration
// ============================================================================

/// A user-defined explorer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name of the network.
    pub name: String,
    /// Base URL of the explorer API, without a trailing slash.
    pub api_url: String,
}

impl CustomNetwork {
    /// Creates a custom network after validating its name and URL.
    ///
    /// # Errors
    ///
    /// Returns `FinderError::InvalidInput` if the name is blank or the URL is
    /// not an `http://` or `https://` URL.
    pub fn new(name: impl Into<String>, api_url: impl Into<String>) -> Result<Self, FinderError> {
        let name = name.into().trim().to_string();
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();

        if name.is_empty() {
            return Err(FinderError::invalid_input("Network name cannot be empty"));
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(FinderError::invalid_input(format!(
                "API URL '{api_url}' must start with http:// or https://"
            )));
        }

        Ok(Self { name, api_url })
    }
}

/// The explorer network lookups are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Network {
    /// Explorer running on localhost.
    #[default]
    LocalNet,
    /// Any other explorer deployment.
    Custom(CustomNetwork),
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LocalNet => "LocalNet",
            Self::Custom(custom) => &custom.name,
        }
    }

    /// Returns the explorer API base URL for this network.
    #[must_use]
    pub fn api_url(&self) -> &str {
        match self {
            Self::LocalNet => LOCALNET_API_URL,
            Self::Custom(custom) => &custom.api_url,
        }
    }

    /// Builds the lookup URL for a single entity.
    #[must_use]
    pub fn entity_url(&self, kind: EntityKind, token: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url().trim_end_matches('/'),
            kind.path_segment(),
            token
        )
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
