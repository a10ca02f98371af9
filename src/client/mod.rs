//! HTTP clients for block-explorer APIs.
//!
//! # Example
//!
//! ```ignore
//! use ledger_finder::client::ExplorerClient;
//! use ledger_finder::domain::Network;
//!
//! let client = ExplorerClient::new(Network::LocalNet)?;
//! let presence = client.check(EntityKind::Block, hash).await?;
//! ```

pub mod explorer;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::ExplorerClient;
pub use http::{HttpClient, HttpConfig};
