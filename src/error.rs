//! Error taxonomy for the news pipeline.
//!
//! Each stage that talks to the network gets its own variant so a caller can
//! tell a search failure from a summarization failure from an image-page
//! failure. Everything bubbles up to the single top-level handler in `main`,
//! which renders one error line and exits.

use thiserror::Error;

/// Failures distinguished by pipeline stage.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The search API answered with a non-success status. Carries the status
    /// code and response body so the top-level message includes both.
    #[error("failed to fetch news: {status} {body}")]
    Search {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The summarization request failed in transport or returned a response
    /// without the expected message content.
    #[error("failed to summarize article: {0}")]
    Summarize(String),

    /// Fetching an article page for og:image extraction failed.
    #[error("failed to fetch article page {url}: {source}")]
    ImageFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An article carried a source URL that does not parse.
    #[error("invalid article URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport or body-decoding failure on the search request.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Serializing the formatted article list failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Writing `news.json` failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display_includes_status_and_body() {
        let err = NewsError::Search {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "no such endpoint".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("no such endpoint"));
    }

    #[test]
    fn test_summarize_error_display() {
        let err = NewsError::Summarize("response missing message content".to_string());
        assert!(err.to_string().contains("missing message content"));
    }

    #[test]
    fn test_invalid_url_converts_from_parse_error() {
        let parse_err = url::Url::parse("").unwrap_err();
        let err = NewsError::from(parse_err);
        assert!(matches!(err, NewsError::InvalidUrl(_)));
    }
}
