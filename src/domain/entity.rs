//! Entity kinds and lookup presence.

use serde::{Deserialize, Serialize};

/// The kinds of ledger entity a token can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Address,
    Transaction,
    Block,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Transaction => "transaction",
            Self::Block => "block",
        }
    }

    /// URL path segment used both by the explorer API and by detail routes.
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Address => "addresses",
            Self::Transaction => "transactions",
            Self::Block => "blocks",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer of a single existence lookup that completed.
///
/// A lookup that could not complete is an `Err(FinderError)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_strings() {
        assert_eq!(EntityKind::Address.as_str(), "address");
        assert_eq!(EntityKind::Transaction.path_segment(), "transactions");
        assert_eq!(EntityKind::Block.to_string(), "block");
        assert_eq!(
            serde_json::to_string(&EntityKind::Transaction).unwrap(),
            "\"transaction\""
        );
    }
}
