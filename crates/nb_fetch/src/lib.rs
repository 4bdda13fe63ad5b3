pub mod newsapi;

pub use newsapi::NewsApiClient;

pub mod prelude {
    pub use super::newsapi::NewsApiClient;
    pub use nb_core::{Article, ArticleSource, Error, NewsQuery, Result};
}
