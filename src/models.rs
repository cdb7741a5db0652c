//! Data models for raw search results and their formatted representations.
//!
//! Two shapes flow through the pipeline:
//! - [`RawArticle`]: an article record as returned by the Exa search API,
//!   held in memory only for the duration of one run
//! - [`FormattedArticle`]: the headline/summary record derived 1:1 from a
//!   raw article, serialized to `news.json` and rendered as a card
//!
//! Exa responds with camelCase field names, hence the `rename` on
//! `publishedDate`. The formatted fields keep the snake_case names used in
//! the persisted file.

use serde::{Deserialize, Serialize};

/// A raw article as returned by the Exa search API.
///
/// Exa may omit any of these fields, so they all default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    /// The article's full text content, as extracted by the search service.
    pub text: String,
    /// The article's source URL.
    pub url: String,
    /// The publication timestamp reported by the search service.
    #[serde(rename = "publishedDate")]
    pub published_date: String,
}

/// Envelope of a successful Exa `/search` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Matching articles in the order the service ranked them.
    pub results: Vec<RawArticle>,
}

/// A formatted article: the headline and summary produced by the LLM plus
/// the source URL and publication date carried over from the raw record.
///
/// The full set for a run is written to `news.json` as a pretty-printed
/// array, overwritten on every run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormattedArticle {
    /// Headline generated by the summarizer.
    pub headline: String,
    /// Summary body generated by the summarizer; empty when the model reply
    /// contained no line break.
    pub news_content: String,
    /// Source URL copied from the raw article.
    pub news_source_url: String,
    /// Publication date copied from the raw article.
    pub article_date: String,
}
