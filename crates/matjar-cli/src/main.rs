mod catalog;
mod feed;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::{run_product, run_search, run_slug};
use crate::feed::run_feed;

#[derive(Debug, Parser)]
#[command(name = "matjar-cli")]
#[command(about = "Matjar storefront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the product a detail-page link points to
    Product {
        /// Detail-page URL or query string, e.g. `?name=هاتف-ذكي`
        link: String,

        /// Print the product as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show live-search suggestions for a query
    Search {
        query: String,

        /// Maximum number of suggestions (defaults to MATJAR_SUGGESTION_LIMIT)
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,
    },
    /// Print the slug a product title maps to
    Slug { title: String },
    /// Write the Google Merchant feed for the current catalog
    Feed {
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = matjar_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Product { link, json } => run_product(&config, &link, json).await?,
        Commands::Search { query, limit } => {
            if let Some(limit) = limit {
                config.suggestion_limit = limit;
            }
            run_search(&config, &query).await?;
        }
        Commands::Slug { title } => run_slug(&title),
        Commands::Feed { out } => run_feed(&config, out.as_deref()).await?,
    }

    Ok(())
}
