use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

/// One search request: a topic plus an optional date window. Absent bounds
/// mean "no lower/upper bound" and are forwarded as such upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsQuery {
    pub topic: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl NewsQuery {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            from: None,
            to: None,
        }
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// A window is valid when `from <= to`; a single-day window
    /// (`from == to`) counts as valid.
    pub fn is_range_valid(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub topic: String,
    pub summary: String,
    pub articles: Vec<Article>,
    pub generated_at: DateTime<Utc>,
}
