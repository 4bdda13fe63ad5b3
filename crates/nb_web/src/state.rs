use std::sync::Arc;

use nb_core::{ArticleSource, Pipeline, Summarizer};

pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            pipeline: Pipeline::new(source, summarizer),
        }
    }
}
