//! Domain types for the ledger finder.
//!
//! # Module Organization
//!
//! - [`token`] - Search tokens and shape classification
//! - [`entity`] - Entity kinds and lookup presence
//! - [`outcome`] - Resolution outcomes
//! - [`error`] - Error types for lookups and configuration
//! - [`network`] - Explorer network configuration

// ============================================================================
// Module Declarations
// ============================================================================

pub mod entity;
pub mod error;
pub mod network;
pub mod outcome;
pub mod token;

// ============================================================================
// Re-exports
// ============================================================================

pub use entity::{EntityKind, Presence};
pub use error::FinderError;
pub use network::{CustomNetwork, Network};
pub use outcome::ResolutionOutcome;
pub use token::{SearchToken, TokenShape};
