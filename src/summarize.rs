//! Groq chat-completion summarizer.
//!
//! Each article's text is wrapped in a fixed instructional prompt and sent
//! as a single user-role message to Groq's OpenAI-compatible completions
//! endpoint. The model's free-text reply is split into a headline and a
//! summary on the first line break.
//!
//! The prompt rules (word limit, tense, tone) are hints to the model only;
//! nothing here checks that the reply honors them. A reply with no line
//! break is not an error either: the whole text becomes the headline and
//! the summary stays empty.

use crate::error::NewsError;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

const COMPLETIONS_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "gemma-7b-it";

/// Seam between the pipeline and the LLM backend.
///
/// The pipeline is generic over this trait so tests can swap in a stub
/// instead of a network client.
pub trait Summarizer {
    /// Summarize one article's text into a headline and summary.
    async fn summarize(&self, article_text: &str) -> Result<Summary, NewsError>;
}

/// Headline and summary parsed from the model's reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub headline: String,
    pub summary: String,
}

impl Summary {
    /// Split a model reply into headline and summary.
    ///
    /// The reply is trimmed, then split on the first line break: first line
    /// is the headline, the remainder is the summary. With no line break the
    /// whole trimmed reply is the headline and the summary is empty.
    pub fn parse(response_text: &str) -> Self {
        let trimmed = response_text.trim();
        match trimmed.split_once('\n') {
            Some((headline, summary)) => Self {
                headline: headline.to_string(),
                summary: summary.to_string(),
            },
            None => Self {
                headline: trimmed.to_string(),
                summary: String::new(),
            },
        }
    }
}

/// Client for Groq's chat-completion endpoint.
pub struct GroqClient {
    api_key: String,
    http: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: reqwest::Client::new(),
        }
    }
}

impl Summarizer for GroqClient {
    #[instrument(level = "info", skip_all)]
    async fn summarize(&self, article_text: &str) -> Result<Summary, NewsError> {
        let payload = completion_payload(article_text);

        let response = self
            .http
            .post(COMPLETIONS_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| NewsError::Summarize(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Completion request rejected");
            return Err(NewsError::Summarize(format!("{status} {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| NewsError::Summarize(e.to_string()))?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| NewsError::Summarize("response missing message content".to_string()))?;

        info!(reply_bytes = content.len(), "Received completion");
        Ok(Summary::parse(content))
    }
}

/// The fixed rule set every article is summarized under.
fn build_prompt(article_text: &str) -> String {
    format!(
        "You are an expert in summarizing articles. \
         Follow the rules to summarize the given article content within 65 words strictly:\
         1. Headline should be short and crisp in sentence case. \
         2. Do not add any opinion. \
         3. The news article should be in past tense and the sentence in present tense. \
         4. Output only the headline and the news article. \
         5. The article should not feel like an advertisement.\
         Generate a headline and summarize the following article using the rules:\n\n\
         Content prompt: {article_text}\n"
    )
}

fn completion_payload(article_text: &str) -> Value {
    json!({
        "model": MODEL,
        "messages": [
            {
                "role": "user",
                "content": build_prompt(article_text)
            }
        ]
    })
}
