use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use nb_core::text::truncate;
use nb_core::{Article, Error, Result, Summarizer, EMPTY_FETCH_SUMMARY};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";
const SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(60);
const LOG_BODY_LIMIT: usize = 256;

const SYSTEM_INSTRUCTION: &str = "You are a news summarizer. You will be given a list of \
    news articles and you will need to summarize them concisely. Include the URL of each \
    article when available.";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(SUMMARIZE_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl fmt::Debug for OpenAiSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSummarizer")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// One block per article, blank-line separated, in the shape the prompt
/// instruction refers to.
fn render_digest(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|article| {
            let mut block = format!("Source: {}\nTitle: {}\n", article.source, article.title);
            if let Some(description) = &article.description {
                block.push_str(&format!("Description: {}\n", description));
            }
            if let Some(content) = &article.content {
                block.push_str(&format!("Content: {}\n", content));
            }
            block.push_str(&format!(
                "URL: {}\nPublished At: {}",
                article.url,
                article.published_at.to_rfc3339()
            ));
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn extract_summary(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let summary = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| Error::Summarize("completion contained no choices".to_string()))?;
    if summary.trim().is_empty() {
        return Err(Error::Summarize("completion was empty".to_string()));
    }
    Ok(summary)
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn summarize(&self, articles: &[Article]) -> Result<String> {
        // The pipeline short-circuits before this point; kept so the
        // contract holds when the summarizer is driven directly.
        if articles.is_empty() {
            return Ok(EMPTY_FETCH_SUMMARY.to_string());
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: render_digest(articles),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = truncate(&body, LOG_BODY_LIMIT);
            error!("LLM request failed: {} returned {}: {}", url, status, body);
            return Err(Error::Summarize(format!(
                "LLM API returned status {}: {}",
                status, body
            )));
        }

        extract_summary(&body)
    }
}
