//! The existence-check capabilities the resolver depends on.

use std::future::Future;

use crate::domain::{EntityKind, FinderError, Presence};

/// Remote existence checks for each entity kind.
///
/// Implementations report `Ok(Presence::Absent)` when the entity does not
/// exist and `Err(_)` when the check itself could not be completed. The
/// resolver decides how errors affect the outcome.
pub trait EntityLookup: Send + Sync {
    fn address_exists(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Presence, FinderError>> + Send;

    fn transaction_exists(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Presence, FinderError>> + Send;

    fn block_exists(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Presence, FinderError>> + Send;

    /// Dispatches to the check for `kind`.
    fn exists(
        &self,
        kind: EntityKind,
        token: &str,
    ) -> impl Future<Output = Result<Presence, FinderError>> + Send {
        async move {
            match kind {
                EntityKind::Address => self.address_exists(token).await,
                EntityKind::Transaction => self.transaction_exists(token).await,
                EntityKind::Block => self.block_exists(token).await,
            }
        }
    }
}
