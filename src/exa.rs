//! Exa search API client.
//!
//! Issues a single neural-search request against the fixed query and date
//! window and returns the raw article records in the order the service
//! ranked them. A non-success response becomes [`NewsError::Search`] with
//! the status code and body; there is no retry.

use crate::error::NewsError;
use crate::models::{RawArticle, SearchResponse};
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

const SEARCH_ENDPOINT: &str = "https://api.exa.ai/search";

/// The one query this tool runs. Category and search type are fixed too.
const QUERY: &str = "Indian stock market and business news";

/// Client for the Exa `/search` endpoint.
///
/// Holds the API key injected at construction time, so tests and callers
/// never reach into ambient environment state.
pub struct ExaClient {
    api_key: String,
    http: reqwest::Client,
}

impl ExaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// Search for news published inside the given window.
    ///
    /// `start_published_date` and `end_published_date` are ISO-8601
    /// timestamps with millisecond precision and UTC marker (see
    /// `utils::search_window`). At most `num_results` records come back;
    /// their order is the service's ranking and is passed through untouched.
    #[instrument(level = "info", skip(self))]
    pub async fn search(
        &self,
        start_published_date: &str,
        end_published_date: &str,
        num_results: u32,
    ) -> Result<Vec<RawArticle>, NewsError> {
        let body = request_body(start_published_date, end_published_date, num_results);
        debug!(endpoint = SEARCH_ENDPOINT, "Sending search request");

        let response = self
            .http
            .post(SEARCH_ENDPOINT)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Search { status, body });
        }

        let parsed: SearchResponse = response.json().await?;
        info!(count = parsed.results.len(), "Search returned articles");
        Ok(parsed.results)
    }
}

/// Build the JSON payload for one search request.
fn request_body(start_published_date: &str, end_published_date: &str, num_results: u32) -> Value {
    json!({
        "startPublishedDate": start_published_date,
        "query": QUERY,
        "type": "neural",
        "useAutoprompt": true,
        "numResults": num_results,
        "endPublishedDate": end_published_date,
        "category": "news",
        "contents": {
            "text": true
        }
    })
}
