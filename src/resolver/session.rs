//! Interactive search session where the newest search wins.
//!
//! Every [`SearchSession::submit`] aborts the resolution that is still
//! running for the previous submission, so a user typing and re-submitting
//! quickly only ever sees the outcome of the latest token.
//!
//! Each submission delivers exactly one [`SearchCompleted`] unless it is
//! superseded or cancelled; a lookup that panics is reported like a failed
//! lookup.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{EntityLookup, Resolver};
use crate::domain::ResolutionOutcome;

/// Message delivered when a submitted search finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCompleted {
    /// Id returned by the `submit` call that started this search.
    pub request_id: u64,
    pub token: String,
    pub outcome: ResolutionOutcome,
}

/// Runs resolutions on the tokio runtime, cancelling superseded ones.
///
/// Must be used from within a tokio runtime.
pub struct SearchSession<L> {
    resolver: Resolver<L>,
    message_tx: mpsc::UnboundedSender<SearchCompleted>,
    in_flight: Option<JoinHandle<()>>,
    last_request_id: u64,
}

impl<L: EntityLookup + 'static> SearchSession<L> {
    /// Creates a session and the receiver its results are delivered on.
    #[must_use]
    pub fn new(resolver: Resolver<L>) -> (Self, mpsc::UnboundedReceiver<SearchCompleted>) {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session = Self {
            resolver,
            message_tx,
            in_flight: None,
            last_request_id: 0,
        };
        (session, message_rx)
    }

    /// Starts resolving `token`, aborting any search still in flight.
    ///
    /// Returns the request id the result will be tagged with.
    pub fn submit(&mut self, token: impl Into<String>) -> u64 {
        if self.cancel() {
            tracing::debug!(
                "Search #{} superseded before completion",
                self.last_request_id
            );
        }

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let token = token.into();
        let resolver = self.resolver.clone();
        let message_tx = self.message_tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let resolution = tokio::spawn({
                let resolver = resolver.clone();
                let token = token.clone();
                async move { resolver.resolve(token).await }
            });
            let mut resolution = AbortOnDrop(resolution);

            let outcome = match (&mut resolution.0).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Search #{request_id} for '{token}' did not complete: {e}");
                    resolver.unfinished_outcome(&token, &e.to_string())
                }
            };
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(SearchCompleted {
                request_id,
                token,
                outcome,
            });
        }));

        request_id
    }

    /// Aborts the search in flight. Returns `true` if one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether the latest submitted search is still running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Id of the latest submission, or `None` if nothing was submitted yet.
    #[must_use]
    pub fn latest_request_id(&self) -> Option<u64> {
        (self.last_request_id > 0).then_some(self.last_request_id)
    }
}

/// Aborts the wrapped task when dropped, so aborting the outer search task
/// also stops the resolution it is waiting on.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl<L> Drop for SearchSession<L> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
