//! # Loregraph - knowledge-graph client
//!
//! ## Usage
//!
//! ```bash
//! # Articles
//! loregraph articles
//! loregraph analyze -t "第一回" -f chapter1.txt
//! loregraph upload -f chapter2.docx
//!
//! # Graph
//! loregraph works
//! loregraph graph 三国演义
//! loregraph work-graph 2
//! loregraph relationships 12
//!
//! # Views
//! loregraph route /knowledge-graph
//! ```

use clap::Parser;
use loregraph::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // LOREGRAPH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LOREGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loregraph=info".into());

    // Logs go to stderr; stdout carries the JSON output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e.summary());
        std::process::exit(1);
    }
}
