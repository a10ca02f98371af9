//! Result of resolving a search token.

use serde::Serialize;

use super::EntityKind;

/// Final outcome of one resolution attempt.
///
/// Produced once per [`Resolver::resolve`](crate::resolver::Resolver::resolve)
/// call and never mutated; callers map it to navigation or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// The token names an existing address.
    ResolvedAddress { token: String },
    /// The token names an existing transaction.
    ResolvedTransaction { token: String },
    /// The token names an existing block.
    ResolvedBlock { token: String },
    /// The token is hash-shaped but no lookup confirmed it.
    NotFound,
    /// The token has no known shape, or is address-shaped but unconfirmed.
    InvalidInput,
    /// A lookup failed and the resolver was configured to report it rather
    /// than treat it as absence.
    TransportError { kind: EntityKind, message: String },
}

impl ResolutionOutcome {
    /// Builds the resolved variant for an entity kind.
    #[must_use]
    pub fn resolved(kind: EntityKind, token: impl Into<String>) -> Self {
        let token = token.into();
        match kind {
            EntityKind::Address => Self::ResolvedAddress { token },
            EntityKind::Transaction => Self::ResolvedTransaction { token },
            EntityKind::Block => Self::ResolvedBlock { token },
        }
    }

    /// The kind of entity that was resolved, if any.
    #[must_use]
    pub const fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            Self::ResolvedAddress { .. } => Some(EntityKind::Address),
            Self::ResolvedTransaction { .. } => Some(EntityKind::Transaction),
            Self::ResolvedBlock { .. } => Some(EntityKind::Block),
            Self::NotFound | Self::InvalidInput | Self::TransportError { .. } => None,
        }
    }

    /// The resolved token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::ResolvedAddress { token }
            | Self::ResolvedTransaction { token }
            | Self::ResolvedBlock { token } => Some(token),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.entity_kind().is_some()
    }

    /// Detail-view route for a resolved outcome, e.g. `/blocks/{hash}`.
    #[must_use]
    pub fn route(&self) -> Option<String> {
        let kind = self.entity_kind()?;
        let token = self.token()?;
        Some(format!("/{}/{}", kind.path_segment(), token))
    }

    /// User-facing message for an unresolved outcome.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::NotFound => Some("Nothing found".to_string()),
            Self::InvalidInput => Some("Invalid search value".to_string()),
            Self::TransportError { kind, message } => {
                Some(format!("{kind} lookup failed: {message}"))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_constructor() {
        assert_eq!(
            ResolutionOutcome::resolved(EntityKind::Block, "ab"),
            ResolutionOutcome::ResolvedBlock {
                token: "ab".to_string()
            }
        );
        assert_eq!(
            ResolutionOutcome::resolved(EntityKind::Address, "X").entity_kind(),
            Some(EntityKind::Address)
        );
    }

    #[test]
    fn test_route() {
        let outcome = ResolutionOutcome::resolved(EntityKind::Transaction, "ff00");
        assert_eq!(outcome.route().as_deref(), Some("/transactions/ff00"));
        assert_eq!(outcome.token(), Some("ff00"));
        assert!(outcome.is_resolved());

        assert_eq!(ResolutionOutcome::NotFound.route(), None);
        assert!(!ResolutionOutcome::InvalidInput.is_resolved());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ResolutionOutcome::NotFound.error_message().as_deref(),
            Some("Nothing found")
        );
        let transport = ResolutionOutcome::TransportError {
            kind: EntityKind::Block,
            message: "timed out".to_string(),
        };
        assert_eq!(
            transport.error_message().as_deref(),
            Some("block lookup failed: timed out")
        );
        assert_eq!(
            ResolutionOutcome::resolved(EntityKind::Block, "a").error_message(),
            None
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ResolutionOutcome::resolved(EntityKind::Address, "A1"))
            .unwrap();
        assert_eq!(json, r#"{"outcome":"resolved_address","token":"A1"}"#);
        assert_eq!(
            serde_json::to_string(&ResolutionOutcome::NotFound).unwrap(),
            r#"{"outcome":"not_found"}"#
        );
    }
}
