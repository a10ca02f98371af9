//! Search token resolution.
//!
//! The [`Resolver`] classifies a token by shape and then probes the lookup
//! collaborator in a fixed order, stopping at the first entity that exists:
//!
//! - address-shaped tokens get a single address lookup
//! - hash-shaped tokens get a transaction lookup, then a block lookup
//!   (order configurable through [`HashPrecedence`])
//! - anything else is rejected without touching the network
//!
//! # Example
//!
//! ```ignore
//! use ledger_finder::client::ExplorerClient;
//! use ledger_finder::resolver::Resolver;
//!
//! let resolver = Resolver::new(ExplorerClient::new(Network::LocalNet)?);
//! let outcome = resolver.resolve("1A2b3C4d5E6f7G8h9I0jK1L2M3N4O5P6Q7").await;
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{EntityKind, Presence, ResolutionOutcome, SearchToken, TokenShape};

mod lookup;
pub mod session;


pub use lookup::EntityLookup;
pub use session::{SearchCompleted, SearchSession};

// ============================================================================
// Policies
// ============================================================================

/// Probe order for hash-shaped tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashPrecedence {
    /// Transactions are searched for more often, so they are tried first.
    #[default]
    TransactionFirst,
    BlockFirst,
}

impl HashPrecedence {
    #[must_use]
    pub const fn order(self) -> [EntityKind; 2] {
        match self {
            Self::TransactionFirst => [EntityKind::Transaction, EntityKind::Block],
            Self::BlockFirst => [EntityKind::Block, EntityKind::Transaction],
        }
    }
}

/// How a lookup that failed to complete affects resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportPolicy {
    /// Treat the failure as "entity absent" and keep going.
    #[default]
    TreatAsAbsent,
    /// Stop and report [`ResolutionOutcome::TransportError`].
    Propagate,
}

/// Resolver behaviour switches. The defaults reproduce the classic explorer
/// search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub hash_precedence: HashPrecedence,
    #[serde(default)]
    pub transport_policy: TransportPolicy,
    /// Report an address-shaped token that no lookup confirmed as
    /// [`ResolutionOutcome::InvalidInput`] (`true`) or
    /// [`ResolutionOutcome::NotFound`] (`false`).
    #[serde(default = "default_reject_unknown_address")]
    pub reject_unknown_address: bool,
}

fn default_reject_unknown_address() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            hash_precedence: HashPrecedence::default(),
            transport_policy: TransportPolicy::default(),
            reject_unknown_address: default_reject_unknown_address(),
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Result of one probe after the transport policy was applied.
enum Probe {
    Found,
    Missing,
    Failed(String),
}

/// Resolves search tokens against an [`EntityLookup`].
///
/// Holds no mutable state, so one resolver can serve any number of
/// concurrent `resolve` calls. Cloning is cheap.
#[derive(Debug)]
pub struct Resolver<L> {
    lookup: Arc<L>,
    config: ResolverConfig,
}

impl<L> Clone for Resolver<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            config: self.config,
        }
    }
}

impl<L: EntityLookup> Resolver<L> {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, ResolverConfig::default())
    }

    #[must_use]
    pub fn with_config(lookup: L, config: ResolverConfig) -> Self {
        Self {
            lookup: Arc::new(lookup),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves a token to the entity it names.
    ///
    /// Lookups run one at a time; a hash-shaped token never has its second
    /// lookup started before the first one has finished.
    pub async fn resolve(&self, token: impl Into<SearchToken>) -> ResolutionOutcome {
        let token = token.into();

        let outcome = match token.shape() {
            TokenShape::Invalid => {
                tracing::debug!("Search token '{token}' has no known shape");
                ResolutionOutcome::InvalidInput
            }
            TokenShape::Address => self.resolve_address(token.as_str()).await,
            TokenShape::BlockOrTransaction => self.resolve_hash(token.as_str()).await,
        };

        tracing::debug!("Resolved '{token}' to {outcome:?}");
        outcome
    }

    async fn resolve_address(&self, token: &str) -> ResolutionOutcome {
        match self.probe(EntityKind::Address, token).await {
            Probe::Found => ResolutionOutcome::resolved(EntityKind::Address, token),
            Probe::Missing => self.unconfirmed(EntityKind::Address),
            Probe::Failed(message) => ResolutionOutcome::TransportError {
                kind: EntityKind::Address,
                message,
            },
        }
    }

    async fn resolve_hash(&self, token: &str) -> ResolutionOutcome {
        for kind in self.config.hash_precedence.order() {
            match self.probe(kind, token).await {
                Probe::Found => return ResolutionOutcome::resolved(kind, token),
                Probe::Missing => {}
                Probe::Failed(message) => {
                    return ResolutionOutcome::TransportError { kind, message };
                }
            }
        }

        self.unconfirmed(EntityKind::Block)
    }

    /// Outcome for a resolution that stopped without producing one, such as
    /// a lookup that panicked. It is treated as a failed lookup of the first
    /// kind the token's shape would have probed.
    pub(crate) fn unfinished_outcome(&self, token: &str, message: &str) -> ResolutionOutcome {
        let kind = match TokenShape::classify(token) {
            TokenShape::Invalid => return ResolutionOutcome::InvalidInput,
            TokenShape::Address => EntityKind::Address,
            TokenShape::BlockOrTransaction => self.config.hash_precedence.order()[0],
        };

        match self.config.transport_policy {
            TransportPolicy::TreatAsAbsent => self.unconfirmed(kind),
            TransportPolicy::Propagate => ResolutionOutcome::TransportError {
                kind,
                message: message.to_string(),
            },
        }
    }

    /// Outcome when no lookup confirmed the token.
    fn unconfirmed(&self, kind: EntityKind) -> ResolutionOutcome {
        match kind {
            EntityKind::Address if self.config.reject_unknown_address => {
                ResolutionOutcome::InvalidInput
            }
            _ => ResolutionOutcome::NotFound,
        }
    }

    async fn probe(&self, kind: EntityKind, token: &str) -> Probe {
        match self.lookup.exists(kind, token).await {
            Ok(Presence::Present) => Probe::Found,
            Ok(Presence::Absent) => {
                tracing::debug!("No {kind} found for '{token}'");
                Probe::Missing
            }
            Err(e) => match self.config.transport_policy {
                TransportPolicy::TreatAsAbsent => {
                    tracing::debug!("{kind} lookup for '{token}' failed, treating as absent: {e}");
                    Probe::Missing
                }
                TransportPolicy::Propagate => {
                    tracing::warn!("{kind} lookup for '{token}' failed: {e}");
                    Probe::Failed(e.to_string())
                }
            },
        }
    }
}
