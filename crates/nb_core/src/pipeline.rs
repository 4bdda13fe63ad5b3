use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::source::ArticleSource;
use crate::summarize::Summarizer;
use crate::types::{Briefing, NewsQuery};
use crate::Result;

/// Summary text used when a query matches no articles at all. The
/// summarizer is not called in that case.
pub const EMPTY_FETCH_SUMMARY: &str = "No articles found for this topic and date range.";

/// Sequences one request: fetch articles, then summarize them.
pub struct Pipeline {
    source: Arc<dyn ArticleSource>,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    pub fn new(source: Arc<dyn ArticleSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { source, summarizer }
    }

    pub async fn run(&self, query: &NewsQuery) -> Result<Briefing> {
        let articles = self.source.fetch(query).await?;
        info!(
            "📰 {} returned {} articles for '{}'",
            self.source.name(),
            articles.len(),
            query.topic
        );

        let summary = if articles.is_empty() {
            EMPTY_FETCH_SUMMARY.to_string()
        } else {
            let summary = self.summarizer.summarize(&articles).await?;
            info!("🧠 {} produced a summary", self.summarizer.name());
            summary
        };

        Ok(Briefing {
            topic: query.topic.clone(),
            summary,
            articles,
            generated_at: Utc::now(),
        })
    }
}
