//! Ledger finder - resolve a search token into an address, transaction or block.
//!
//! A token is classified by its shape and then confirmed against a block
//! explorer, trying the possible entity kinds in a fixed order.
//!
//! ## Module Structure
//!
//! - `domain`: tokens, entity kinds, outcomes, errors and networks
//! - `resolver`: the classification-and-cascade resolver and search sessions
//! - `client`: HTTP lookups against an explorer REST API
//! - `config`: persisted application configuration
//! - `cli`: command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod resolver;

#[cfg(test)]
mod test_utils;
