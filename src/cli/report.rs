//! Rendering of resolution outcomes for the terminal.

use serde::Serialize;

use crate::domain::{ResolutionOutcome, TokenShape};

/// JSON shape of a search result.
#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    #[serde(flatten)]
    outcome: &'a ResolutionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<String>,
}

/// Human-readable rendering of an outcome.
#[must_use]
pub fn render_text(query: &str, outcome: &ResolutionOutcome) -> String {
    if let (Some(kind), Some(route)) = (outcome.entity_kind(), outcome.route()) {
        return format!("Found {kind} {query}\n  route: {route}");
    }

    let message = outcome.error_message().unwrap_or_default();
    match outcome {
        ResolutionOutcome::InvalidInput => format!("{message}\n  hint: {}", invalid_hint(query)),
        _ => message,
    }
}

/// Pretty-printed JSON rendering of an outcome.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(query: &str, outcome: &ResolutionOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SearchReport {
        query,
        outcome,
        route: outcome.route(),
    })
}

fn invalid_hint(query: &str) -> String {
    match TokenShape::classify(query) {
        TokenShape::Address => "No address could be confirmed for this value.".to_string(),
        _ => TokenShape::describe(query),
    }
}
