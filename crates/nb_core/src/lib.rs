pub mod error;
pub mod pipeline;
pub mod source;
pub mod summarize;
pub mod text;
pub mod types;

pub use error::Error;
pub use pipeline::{Pipeline, EMPTY_FETCH_SUMMARY};
pub use source::ArticleSource;
pub use summarize::Summarizer;
pub use types::{Article, Briefing, NewsQuery};

pub type Result<T> = std::result::Result<T, Error>;
