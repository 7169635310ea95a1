//! HTTP client for the suggestion endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;

use crate::error::TypeaheadError;

use super::protocol::{SuggestQuery, SuggestResponse};

/// Fixed path of the suggestion endpoint on the server
const AUTOCOMPLETE_PATH: &str = "/autocomplete";

/// Errors that can occur while fetching suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Network error during the request (includes timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status code
    #[error("Server error ({code})")]
    Api { code: u16 },

    /// Failed to decode the response body
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Client for the suggestion endpoint
#[derive(Debug, Clone)]
pub struct SuggestClient {
    client: Client,
    endpoint: Url,
}

impl SuggestClient {
    /// Create a client for the given server base URL.
    ///
    /// The fixed `/autocomplete` path is appended to the base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TypeaheadError> {
        let invalid = |reason: String| TypeaheadError::InvalidEndpoint {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        let endpoint = base
            .join(AUTOCOMPLETE_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, endpoint })
    }

    /// The URL the client POSTs to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch suggestions for a query
    pub async fn fetch(&self, search: &str) -> Result<SuggestResponse, SuggestError> {
        let body = SuggestQuery {
            search: search.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let response = response.error_for_status().map_err(|e| SuggestError::Api {
            code: e.status().map(|s| s.as_u16()).unwrap_or(0),
        })?;

        response
            .json::<SuggestResponse>()
            .await
            .map_err(|e| SuggestError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
