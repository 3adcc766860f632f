//! Derivation of the local [`ApplicationResult`] from the remote envelope.
//!
//! Create and update only count as successful when the success node says
//! exactly `"Success"`. Cancel and search accept any success node. Both rules
//! are kept as the itinerary manager has always been read this way.

use concierge_core::itinerary::{ApplicationResults, ResultNode};
use concierge_core::reservation::ApplicationResult;

pub const SUCCESS_TEXT: &str = "Success";

/// Rule used by create and update.
pub fn by_success_text(results: &ApplicationResults) -> ApplicationResult {
    let success = results
        .success
        .as_ref()
        .map(|node| node.short_text() == SUCCESS_TEXT)
        .unwrap_or(false);

    ApplicationResult {
        success,
        warnings: short_texts(results.warning.as_deref()),
        errors: short_texts(results.error.as_deref()),
    }
}

/// Rule used by cancel and search.
pub fn by_success_presence(results: &ApplicationResults) -> ApplicationResult {
    ApplicationResult {
        success: results.success.is_some(),
        warnings: short_texts(results.warning.as_deref()),
        errors: short_texts(results.error.as_deref()),
    }
}

fn short_texts(nodes: Option<&[ResultNode]>) -> Vec<String> {
    nodes
        .unwrap_or_default()
        .iter()
        .map(|node| node.short_text().to_string())
        .collect()
}
