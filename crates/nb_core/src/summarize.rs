use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Name of the model or service backing this summarizer
    fn name(&self) -> &str;

    /// Condense a batch of articles into a single summary text
    async fn summarize(&self, articles: &[Article]) -> Result<String>;
}
