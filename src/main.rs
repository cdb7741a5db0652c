//! # Indian Market News
//!
//! A small digest tool for Indian stock market and business news. One run
//! walks a linear pipeline:
//!
//! 1. **Search**: query the Exa neural-search API for news published inside
//!    a user-supplied date range
//! 2. **Summarize**: send each article's text to the Groq chat-completion
//!    API and split the reply into a headline and a summary
//! 3. **Persist**: write the formatted list to `news.json` (overwritten on
//!    every run)
//! 4. **Render**: print one card per article, with og:image preview URLs
//!    scraped from the article's page
//!
//! Everything is sequential and blocking per article; any failure bubbles
//! up to one top-level handler that prints a single error line and exits
//! non-zero.
//!
//! ## Usage
//!
//! ```sh
//! indian_market_news -s 2024-01-01 -e 2024-01-02 -n 5
//! ```
//!
//! API keys come from `--exa-api-key` / `--groq-api-key`, the `EXA_KEY` /
//! `GROQ_API_KEY` environment variables, or a local `.env` file.

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod exa;
mod images;
mod models;
mod output;
mod pipeline;
mod summarize;
mod utils;

use cli::Cli;
use error::NewsError;
use exa::ExaClient;
use summarize::GroqClient;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();

    if let Err(e) = run(args).await {
        error!(error = %e, "Pipeline failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), NewsError> {
    let start_time = std::time::Instant::now();
    info!("indian_market_news starting up");
    debug!(
        start = %args.start_date,
        end = %args.end_date,
        num_articles = args.num_articles,
        output = %args.output,
        "Parsed CLI arguments"
    );

    let (start_published, end_published) = utils::search_window(args.start_date, args.end_date);
    debug!(%start_published, %end_published, "Derived search window");

    let search = ExaClient::new(args.exa_api_key);
    let summarizer = GroqClient::new(args.groq_api_key);

    let raw_articles = search
        .search(&start_published, &end_published, args.num_articles)
        .await?;

    let articles = pipeline::format_articles(&summarizer, raw_articles).await?;
    output::write_news_json(&args.output, &articles).await?;

    if articles.is_empty() {
        println!("No news found for the selected date range");
    } else {
        info!(count = articles.len(), "News fetched successfully");
        let http = reqwest::Client::new();
        for article in &articles {
            // One extra blocking fetch per card, at render time.
            let image_urls = images::fetch_og_images(&http, &article.news_source_url).await?;
            output::render_article(article, &image_urls);
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");
    Ok(())
}
