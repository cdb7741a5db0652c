//! Command-line interface definitions.
//!
//! All inputs the original form collected arrive here as clap arguments:
//! the publication date range, the article count, and the output path. The
//! API keys fall through to environment variables so a local `.env` file
//! (loaded at startup) is enough to run without flags.

use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the news digest.
///
/// # Examples
///
/// ```sh
/// # Keys from .env / environment
/// indian_market_news -s 2024-01-01 -e 2024-01-02 -n 5
///
/// # Keys passed explicitly
/// indian_market_news -s 2024-01-01 -e 2024-01-02 \
///     --exa-api-key KEY1 --groq-api-key KEY2
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// First day of the publication window (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: NaiveDate,

    /// Last day of the publication window (YYYY-MM-DD)
    #[arg(short, long)]
    pub end_date: NaiveDate,

    /// Number of articles to fetch (1-100)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub num_articles: u32,

    /// Path of the JSON file the formatted articles are written to
    #[arg(short, long, default_value = "news.json")]
    pub output: String,

    /// Exa search API key
    #[arg(long, env = "EXA_KEY", hide_env_values = true)]
    pub exa_api_key: String,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "indian_market_news",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-02",
            "--exa-api-key",
            "exa-test",
            "--groq-api-key",
            "groq-test",
        ]
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(base_args());

        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cli.end_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(cli.num_articles, 5);
        assert_eq!(cli.output, "news.json");
    }

    #[test]
    fn test_cli_num_articles_in_range() {
        let mut args = base_args();
        args.extend(["--num-articles", "100"]);
        let cli = Cli::parse_from(args);
        assert_eq!(cli.num_articles, 100);
    }

    #[test]
    fn test_cli_num_articles_zero_rejected() {
        let mut args = base_args();
        args.extend(["--num-articles", "0"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_num_articles_over_hundred_rejected() {
        let mut args = base_args();
        args.extend(["--num-articles", "101"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "indian_market_news",
            "-s",
            "2024-06-30",
            "-e",
            "2024-07-01",
            "-n",
            "2",
            "-o",
            "/tmp/out.json",
            "--exa-api-key",
            "exa-test",
            "--groq-api-key",
            "groq-test",
        ]);

        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(cli.num_articles, 2);
        assert_eq!(cli.output, "/tmp/out.json");
    }

    #[test]
    fn test_cli_bad_date_rejected() {
        let cli = Cli::try_parse_from([
            "indian_market_news",
            "--start-date",
            "yesterday",
            "--end-date",
            "2024-01-02",
            "--exa-api-key",
            "exa-test",
            "--groq-api-key",
            "groq-test",
        ]);
        assert!(cli.is_err());
    }
}
