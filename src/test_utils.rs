//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting tokens and lookup stubs across
//! tests.
#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::domain::{EntityKind, FinderError, Presence};
use crate::resolver::EntityLookup;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TokenMother;

impl TokenMother {
    /// A 34-character alphanumeric address.
    #[must_use]
    pub fn address() -> &'static str {
        "1A2b3C4d5E6f7G8h9I0jK1L2M3N4O5P6Q7"
    }

    /// 64 lowercase `a` characters.
    #[must_use]
    pub fn hash() -> &'static str {
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
    }

    /// A 64-character hash mixing digits with both letter cases.
    #[must_use]
    pub fn mixed_case_hash() -> &'static str {
        "0123456789abcdefABCDEF0123456789abcdef0123456789abcdef0123456789"
    }

    /// Tokens that match neither shape.
    #[must_use]
    pub fn invalid() -> Vec<String> {
        vec![
            String::new(),
            "abc".to_string(),
            "g".repeat(64),
            "a".repeat(33),
            "a".repeat(35),
            "a".repeat(65),
            format!("{}!", "a".repeat(33)),
        ]
    }
}

// ============================================================================
// Stub Lookup
// ============================================================================

/// Canned answer of a [`StubLookup`] check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Present,
    Absent,
    Fail,
    Panic,
}

/// Lookup that answers from fixed replies and records every call.
#[derive(Debug)]
pub struct StubLookup {
    address: Reply,
    transaction: Reply,
    block: Reply,
    delay: Option<Duration>,
    calls: Mutex<Vec<(EntityKind, String)>>,
}

impl StubLookup {
    /// Every check answers `Absent`.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            address: Reply::Absent,
            transaction: Reply::Absent,
            block: Reply::Absent,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn address(mut self, reply: Reply) -> Self {
        self.address = reply;
        self
    }

    #[must_use]
    pub fn transaction(mut self, reply: Reply) -> Self {
        self.transaction = reply;
        self
    }

    #[must_use]
    pub fn block(mut self, reply: Reply) -> Self {
        self.block = reply;
        self
    }

    /// Sleep before answering, to keep a lookup in flight.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Kinds checked so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<EntityKind> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(kind, _)| *kind)
            .collect()
    }

    async fn answer(&self, kind: EntityKind, token: &str) -> Result<Presence, FinderError> {
        self.calls.lock().unwrap().push((kind, token.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = match kind {
            EntityKind::Address => self.address,
            EntityKind::Transaction => self.transaction,
            EntityKind::Block => self.block,
        };

        match reply {
            Reply::Present => Ok(Presence::Present),
            Reply::Absent => Ok(Presence::Absent),
            Reply::Fail => Err(FinderError::status(kind.as_str(), token, 500)),
            Reply::Panic => panic!("{kind} lookup crashed"),
        }
    }
}

impl EntityLookup for StubLookup {
    async fn address_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.answer(EntityKind::Address, token).await
    }

    async fn transaction_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.answer(EntityKind::Transaction, token).await
    }

    async fn block_exists(&self, token: &str) -> Result<Presence, FinderError> {
        self.answer(EntityKind::Block, token).await
    }
}

// ============================================================================
// Explorer Stub Server
// ============================================================================

/// Starts a minimal HTTP server answering every request whose path starts
/// with one of `routes` with the paired status, and 404 otherwise.
///
/// Returns the API base URL (`http://127.0.0.1:{port}/api`).
pub async fn spawn_explorer_stub(routes: Vec<(String, u16)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let status = routes
                    .iter()
                    .find(|(prefix, _)| path.starts_with(prefix.as_str()))
                    .map_or(404, |(_, status)| *status);

                let body = "{}";
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/api")
}

#[test]
fn test_token_mother_shapes() {
    assert_eq!(TokenMother::address().len(), 34);
    assert_eq!(TokenMother::hash().len(), 64);
    assert_eq!(TokenMother::mixed_case_hash().len(), 64);
}
