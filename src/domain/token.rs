//! Search tokens and shape classification.
//!
//! A token is classified purely by its text. The shape decides which lookups
//! are attempted; it never decides which entity the token actually names.

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Patterns
// ============================================================================

/// 34 alphanumeric characters.
const ADDRESS_PATTERN: &str = "^[a-zA-Z0-9]{34}$";

/// 64 hex characters, shared by transaction ids and block hashes.
const HASH_PATTERN: &str = "^[A-Fa-f0-9]{64}$";

static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ADDRESS_PATTERN).expect("address pattern is valid"));

static HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HASH_PATTERN).expect("hash pattern is valid"));

/// Length of an address token.
pub const ADDRESS_LEN: usize = 34;

/// Length of a transaction id or block hash token.
pub const HASH_LEN: usize = 64;

// ============================================================================
// Search Token
// ============================================================================

/// The raw string a user searched for.
///
/// No trimming or case folding is applied; whatever the caller passes is
/// what gets classified and sent to the lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchToken(String);

impl SearchToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn shape(&self) -> TokenShape {
        TokenShape::classify(&self.0)
    }
}

impl From<&str> for SearchToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SearchToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Token Shape
// ============================================================================

/// Textual shape of a search token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenShape {
    /// 34 alphanumeric characters.
    Address,
    /// 64 hex characters; either a transaction id or a block hash.
    BlockOrTransaction,
    /// Matches no known shape.
    Invalid,
}

impl TokenShape {
    /// Classifies a token. The address pattern is tested first, so it wins if
    /// a token ever matched both patterns.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        if ADDRESS_REGEX.is_match(token) {
            Self::Address
        } else if HASH_REGEX.is_match(token) {
            Self::BlockOrTransaction
        } else {
            Self::Invalid
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::BlockOrTransaction => "Block or transaction",
            Self::Invalid => "Invalid",
        }
    }

    /// Explains how a token was classified, for display next to a rejected
    /// search.
    #[must_use]
    pub fn describe(token: &str) -> String {
        let len = token.chars().count();
        match Self::classify(token) {
            Self::Address => "Valid address format.".to_string(),
            Self::BlockOrTransaction => "Valid transaction id or block hash format.".to_string(),
            Self::Invalid if len == 0 => {
                "Enter an address (34 characters) or a transaction id / block hash (64 hex characters)."
                    .to_string()
            }
            Self::Invalid if len == HASH_LEN => {
                "Hashes may only contain hex characters (0-9, a-f).".to_string()
            }
            Self::Invalid if len == ADDRESS_LEN => {
                "Addresses may only contain letters and digits.".to_string()
            }
            Self::Invalid => format!(
                "Unrecognized format ({len} chars). Expected {ADDRESS_LEN} for an address or {HASH_LEN} for a hash."
            ),
        }
    }
}

impl std::fmt::Display for TokenShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
