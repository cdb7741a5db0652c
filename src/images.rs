//! og:image preview extraction.
//!
//! Fetches an article's page and collects the `content` value of every
//! `<meta property="og:image">` tag, in document order. The values are
//! returned verbatim; relative URLs are not resolved.

use crate::error::NewsError;
use scraper::{Html, Selector};
use tracing::{debug, instrument};
use url::Url;

/// Collect every og:image URL from a page's markup, in document order.
///
/// Markup without such tags (or markup that barely parses at all) yields an
/// empty list.
pub fn extract_og_images(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .map(str::to_string)
        .collect()
}

/// Fetch an article page and return its og:image URLs.
///
/// No timeout, no retry: a failed fetch propagates like any other pipeline
/// error.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_og_images(http: &reqwest::Client, url: &str) -> Result<Vec<String>, NewsError> {
    let page_url = Url::parse(url)?;

    let body = http
        .get(page_url)
        .send()
        .await
        .map_err(|e| NewsError::ImageFetch {
            url: url.to_string(),
            source: e,
        })?
        .text()
        .await
        .map_err(|e| NewsError::ImageFetch {
            url: url.to_string(),
            source: e,
        })?;

    let image_urls = extract_og_images(&body);
    debug!(count = image_urls.len(), "Extracted og:image URLs");
    Ok(image_urls)
}
