mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

use nb_core::{ArticleSource, Error, NewsQuery, Pipeline, Result, Summarizer};
use nb_fetch::NewsApiClient;
use nb_inference::OpenAiSummarizer;
use nb_web::AppState;

use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the briefing page in a local web UI
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Print a one-shot briefing to stdout
    Brief {
        /// Topic to search news for
        topic: String,
        /// Earliest publication date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest publication date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

fn build_clients(config: &Config) -> Result<(Arc<dyn ArticleSource>, Arc<dyn Summarizer>)> {
    let mut source = NewsApiClient::new(&config.news_api_key)?;
    if let Some(url) = &config.news_api_url {
        source = source.with_base_url(url);
    }
    if let Some(page_size) = config.news_page_size {
        source = source.with_page_size(page_size);
    }

    let mut summarizer = OpenAiSummarizer::new(&config.openai_api_key)?;
    if let Some(url) = &config.openai_api_url {
        summarizer = summarizer.with_base_url(url);
    }
    if let Some(model) = &config.openai_model {
        summarizer = summarizer.with_model(model);
    }

    Ok((Arc::new(source), Arc::new(summarizer)))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let (source, summarizer) = build_clients(&config)?;
    info!("🔑 Credentials loaded, clients ready");

    match cli.command {
        Commands::Serve { addr } => {
            let state = AppState::new(source, summarizer);
            nb_web::serve(state, addr).await?;
        }
        Commands::Brief { topic, from, to } => {
            let query = NewsQuery::new(topic).between(from, to);
            if !query.is_range_valid() {
                return Err(Error::InvalidQuery(
                    "--from must not be after --to".to_string(),
                ));
            }

            let pipeline = Pipeline::new(source, summarizer);
            let briefing = pipeline.run(&query).await?;

            println!("{}", briefing.summary);
            if !briefing.articles.is_empty() {
                println!();
                println!("Sources:");
                for article in &briefing.articles {
                    println!("  - {} ({})", article.title, article.url);
                }
            }
        }
    }

    Ok(())
}
