//! Explorer REST API client.
//!
//! Each existence check is a single `GET {api_url}/{kind}/{token}`; only the
//! status code is inspected, the response body is ignored.

use reqwest::StatusCode;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{EntityKind, FinderError, Network, Presence};
use crate::resolver::EntityLookup;

// ============================================================================
// Explorer Client
// ============================================================================

/// Entity lookups against a block-explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: HttpClient,
    network: Network,
}

impl ExplorerClient {
    /// Creates a client for `network` with the default HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `FinderError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(network: Network) -> Result<Self, FinderError> {
        Self::with_config(network, HttpConfig::default())
    }

    /// # Errors
    ///
    /// Returns `FinderError::ClientInit` if the HTTP client fails to initialize.
    pub fn with_config(network: Network, config: HttpConfig) -> Result<Self, FinderError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
            network,
        })
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Checks whether an entity of `kind` exists for `token`.
    ///
    /// # Errors
    ///
    /// Returns `FinderError::Network` if the request could not be sent, or
    /// `FinderError::Status` for any status other than success and 404.
    pub async fn check(&self, kind: EntityKind, token: &str) -> Result<Presence, FinderError> {
        let url = self.network.entity_url(kind, token);
        tracing::debug!("Checking {kind} at {url}");

        let response = self.http.get(&url).send().await?;
        presence_from_status(kind, token, response.status())
    }
}

impl EntityLookup for ExplorerClient {
    async fn address_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.check(EntityKind::Address, token).await
    }

    async fn transaction_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.check(EntityKind::Transaction, token).await
    }

    async fn block_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.check(EntityKind::Block, token).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Maps an explorer response status to a lookup answer.
pub(crate) fn presence_from_status(
    kind: EntityKind,
    token: &str,
    status: StatusCode,
) -> Result<Presence, FinderError> {
    if status.is_success() {
        Ok(Presence::Present)
    } else if status == StatusCode::NOT_FOUND {
        Ok(Presence::Absent)
    } else {
        Err(FinderError::status(kind.as_str(), token, status.as_u16()))
    }
}

// ============================================================================
// Tests
// ============================================================================
