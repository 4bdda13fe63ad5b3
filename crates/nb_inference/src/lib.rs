pub mod openai;

pub use openai::OpenAiSummarizer;

pub mod prelude {
    pub use super::openai::OpenAiSummarizer;
    pub use nb_core::{Article, Error, Result, Summarizer};
}
