//! `news.json` persistence and article card rendering.
//!
//! The formatted article list is written as a pretty-printed JSON array,
//! overwriting whatever the previous run left behind. The file is never read
//! back by this tool. Cards render to stdout.

use crate::error::NewsError;
use crate::models::FormattedArticle;
use tokio::fs;
use tracing::{info, instrument};

/// Write the formatted articles to `path` as a pretty-printed JSON array.
#[instrument(level = "info", skip(articles), fields(%path, count = articles.len()))]
pub async fn write_news_json(path: &str, articles: &[FormattedArticle]) -> Result<(), NewsError> {
    let json = serde_json::to_string_pretty(articles)?;
    fs::write(path, json).await?;
    info!(%path, "Wrote news JSON file");
    Ok(())
}

/// Render one article card to stdout: headline, summary, source URL, any
/// og:image URLs, published date, separator.
pub fn render_article(article: &FormattedArticle, image_urls: &[String]) {
    println!("## {}", article.headline);
    println!();
    if !article.news_content.is_empty() {
        println!("{}", article.news_content);
    }
    println!("{}", article.news_source_url);
    for image_url in image_urls {
        println!("{image_url}");
    }
    println!("Published Date: {}", article.article_date);
    println!("---");
}
