//! Error types for ledger lookups.
//!
//! Lookup collaborators report entity absence through [`Presence`](super::Presence);
//! everything in this module describes a lookup that could not be completed.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for lookup operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Network-related errors from HTTP requests (connect, timeout, body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The explorer answered with a status other than success or 404.
    #[error("{entity} lookup for '{id}' failed with HTTP {status}")]
    Status {
        /// The kind of entity being looked up (e.g., "transaction").
        entity: &'static str,
        /// The identifier that was looked up.
        id: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FinderError {
    /// Create a new status error.
    #[must_use]
    pub fn status(entity: &'static str, id: impl Into<String>, status: u16) -> Self {
        Self::Status {
            entity,
            id: id.into(),
            status,
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new invalid input error.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of why the input is invalid
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finder_error_display() {
        let status_err = FinderError::status("block", "abc123", 500);
        assert_eq!(
            status_err.to_string(),
            "block lookup for 'abc123' failed with HTTP 500"
        );

        let init_err = FinderError::client_init("no tls backend");
        assert_eq!(
            init_err.to_string(),
            "Failed to initialize HTTP client: no tls backend"
        );

        let invalid_err = FinderError::invalid_input("bad input");
        assert_eq!(invalid_err.to_string(), "Invalid input: bad input");
    }

    #[test]
    fn test_status_error_creation() {
        let err = FinderError::status("address", "ADDR123", 503);
        match err {
            FinderError::Status { entity, id, status } => {
                assert_eq!(entity, "address");
                assert_eq!(id, "ADDR123");
                assert_eq!(status, 503);
            }
            _ => panic!("Expected Status variant"),
        }
    }

    #[test]
    fn test_into_report_keeps_message() {
        let report = FinderError::invalid_input("empty query").into_report();
        assert_eq!(report.to_string(), "Invalid input: empty query");
    }
}
