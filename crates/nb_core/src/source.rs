use async_trait::async_trait;

use crate::types::{Article, NewsQuery};
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Name of the upstream news service
    fn name(&self) -> &str;

    /// Fetch the articles matching a query; an empty list is a valid,
    /// non-error outcome
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>>;
}
