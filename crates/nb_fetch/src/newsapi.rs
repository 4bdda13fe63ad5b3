use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use nb_core::text::truncate;
use nb_core::{Article, ArticleSource, Error, NewsQuery, Result};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_PAGE_SIZE: u32 = 5;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const LOG_BODY_LIMIT: usize = 256;

#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    source: WireSource,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<DateTime<Utc>>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireSource {
    name: Option<String>,
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn query_params(&self, query: &NewsQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.topic.clone()),
            ("sortBy", "popularity".to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(from) = query.from {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = query.to {
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        params.push(("apiKey", self.api_key.clone()));
        params
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn parse_articles(body: &str) -> Result<Vec<Article>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        return Err(Error::Fetch {
            status: 200,
            body: response
                .message
                .unwrap_or_else(|| "news API reported an error".to_string()),
        });
    }
    Ok(response.articles.into_iter().filter_map(into_article).collect())
}

// NewsAPI pads its responses with "[Removed]" stubs; anything without a
// usable title, URL, or timestamp is dropped here rather than surfaced as
// a half-empty Article.
fn into_article(wire: WireArticle) -> Option<Article> {
    let title = wire
        .title
        .filter(|t| !t.trim().is_empty() && t != "[Removed]")?;
    let url = wire.url.filter(|u| !u.is_empty())?;
    let published_at = wire.published_at?;
    Some(Article {
        title,
        description: wire.description,
        source: wire.source.name.unwrap_or_else(|| "unknown".to_string()),
        url,
        published_at,
        content: wire.content,
    })
}

#[async_trait]
impl ArticleSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        if query.topic.trim().is_empty() {
            return Err(Error::InvalidQuery("topic must not be empty".to_string()));
        }

        let url = format!("{}/everything", self.base_url);
        debug!(
            "GET {} q='{}' from={:?} to={:?}",
            url, query.topic, query.from, query.to
        );

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(query))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = truncate(&body, LOG_BODY_LIMIT).to_string();
            error!("news API request failed: {} returned {}: {}", url, status, body);
            return Err(Error::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        parse_articles(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_ARTICLES: &str = r#"{
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {
                "source": {"id": null, "name": "Example Times"},
                "title": "Summit reaches agreement",
                "description": "Negotiators agree on targets.",
                "url": "https://news.example.com/summit",
                "publishedAt": "2024-01-02T08:00:00Z",
                "content": "Full text..."
            },
            {
                "source": {"id": "wire", "name": "Wire Service"},
                "title": "Sea levels measured again",
                "description": null,
                "url": "https://news.example.com/sea-levels",
                "publishedAt": "2024-01-03T10:30:00Z",
                "content": null
            },
            {
                "source": {"id": null, "name": "Daily Planet"},
                "title": "Glaciers retreat faster",
                "description": "New satellite data.",
                "url": "https://news.example.com/glaciers",
                "publishedAt": "2024-01-05T18:45:00Z",
                "content": "Full text..."
            }
        ]
    }"#;

    #[test]
    fn parses_articles_in_response_order() {
        let articles = parse_articles(THREE_ARTICLES).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "Summit reaches agreement");
        assert_eq!(articles[1].title, "Sea levels measured again");
        assert!(articles[1].description.is_none());
        assert_eq!(articles[2].source, "Daily Planet");
        assert!(articles.iter().all(|a| !a.title.is_empty()));
    }

    #[test]
    fn drops_removed_and_incomplete_stubs() {
        let body = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {
                    "source": {"id": null, "name": "[Removed]"},
                    "title": "[Removed]",
                    "description": "[Removed]",
                    "url": "https://removed.example.com",
                    "publishedAt": "2024-01-01T00:00:00Z",
                    "content": null
                },
                {
                    "source": {"id": null, "name": "No Link Gazette"},
                    "title": "Story without a link",
                    "description": null,
                    "url": null,
                    "publishedAt": "2024-01-01T00:00:00Z",
                    "content": null
                },
                {
                    "source": {"id": null, "name": "Example Times"},
                    "title": "The one real story",
                    "description": null,
                    "url": "https://news.example.com/real",
                    "publishedAt": "2024-01-01T00:00:00Z",
                    "content": null
                }
            ]
        }"#;
        let articles = parse_articles(body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "The one real story");
    }

    #[test]
    fn empty_article_list_is_not_an_error() {
        let body = r#"{"status": "ok", "totalResults": 0, "articles": []}"#;
        let articles = parse_articles(body).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn api_level_error_status_is_surfaced() {
        let body = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."}"#;
        let err = parse_articles(body).unwrap_err();
        match err {
            Error::Fetch { status, body } => {
                assert_eq!(status, 200);
                assert!(body.contains("invalid"));
            }
            other => panic!("expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_articles("not json at all").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn query_params_include_both_bounds_and_credential() {
        let client = NewsApiClient::new("test-key").unwrap();
        let query = NewsQuery::new("climate change").between(
            Some("2024-01-01".parse().unwrap()),
            Some("2024-01-01".parse().unwrap()),
        );
        let params = client.query_params(&query);
        assert!(params.contains(&("q", "climate change".to_string())));
        assert!(params.contains(&("from", "2024-01-01".to_string())));
        assert!(params.contains(&("to", "2024-01-01".to_string())));
        assert!(params.contains(&("sortBy", "popularity".to_string())));
        assert!(params.contains(&("pageSize", "5".to_string())));
        assert!(params.contains(&("apiKey", "test-key".to_string())));
    }

    #[test]
    fn absent_bounds_are_not_sent() {
        let client = NewsApiClient::new("test-key").unwrap();
        let params = client.query_params(&NewsQuery::new("ai"));
        assert!(!params.iter().any(|(name, _)| *name == "from"));
        assert!(!params.iter().any(|(name, _)| *name == "to"));
    }

    #[tokio::test]
    async fn empty_topic_is_rejected_before_any_request() {
        let client = NewsApiClient::new("test-key").unwrap();
        let err = client.fetch(&NewsQuery::new("   ")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)));
    }

    #[test]
    fn debug_output_redacts_the_credential() {
        let client = NewsApiClient::new("secret-key").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-key"));
    }
}
