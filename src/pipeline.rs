//! Sequential summarize-and-format pass over raw search results.

use crate::error::NewsError;
use crate::models::{FormattedArticle, RawArticle};
use crate::summarize::Summarizer;
use tracing::{debug, info, instrument};

/// Summarize each raw article in order and build its formatted record.
///
/// Articles are processed strictly one at a time, in the order the search
/// service returned them. Every raw article maps 1:1 to a formatted one, so
/// N results in means N formatted articles out. There is no per-article
/// fallback: the first summarization failure aborts the whole batch.
#[instrument(level = "info", skip_all, fields(count = raw_articles.len()))]
pub async fn format_articles<S: Summarizer>(
    summarizer: &S,
    raw_articles: Vec<RawArticle>,
) -> Result<Vec<FormattedArticle>, NewsError> {
    let mut formatted = Vec::with_capacity(raw_articles.len());

    for (i, article) in raw_articles.into_iter().enumerate() {
        debug!(index = i, url = %article.url, "Summarizing article");
        let summary = summarizer.summarize(&article.text).await?;

        formatted.push(FormattedArticle {
            headline: summary.headline,
            news_content: summary.summary,
            news_source_url: article.url,
            article_date: article.published_date,
        });
    }

    info!(count = formatted.len(), "Formatted articles");
    Ok(formatted)
}
