//! Request and response types for the suggestion endpoint.
//!
//! These mirror the server's JSON contract exactly, so the response shape is
//! validated once at the boundary instead of trusted field-by-field.

use serde::{Deserialize, Serialize};

/// Status value the server sends for a successful lookup
pub const STATUS_OK: &str = "OK";

/// Request body for `POST /autocomplete`
#[derive(Debug, Clone, Serialize)]
pub struct SuggestQuery {
    pub search: String,
}

/// Response body from the suggestion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestResponse {
    pub status: String,
    /// Candidate completions, in server ranking order. Error bodies may omit
    /// the field entirely.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl SuggestResponse {
    /// True when the server reported success and returned at least one suggestion
    pub fn has_results(&self) -> bool {
        self.status == STATUS_OK && !self.suggestions.is_empty()
    }
}
