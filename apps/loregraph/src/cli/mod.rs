//! # Loregraph CLI Module
//!
//! This module implements the CLI interface for Loregraph.
//!
//! ## Available Commands
//!
//! - `articles` / `article` - List articles, show one article
//! - `upload` - Extract the text of a .txt/.docx/.pdf document
//! - `analyze` - Submit an article for AI analysis
//! - `analysis` / `article-graph` / `delete` - Per-article operations
//! - `graph` / `work-graph` / `works` - Knowledge-graph data and the list of works
//! - `node` / `relationships` - One node and its relationships
//! - `events` / `characters` - Event and character listings
//! - `route` / `routes` - Resolve a view path, print the route table

mod commands;

use crate::api::Api;
use crate::error::CliError;
use crate::settings::{self, FlagOverrides};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Loregraph - literary knowledge-graph client
///
/// Talks to the knowledge-graph backend and prints its JSON responses.
#[derive(Parser, Debug)]
#[command(name = "loregraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides config file and LOREGRAPH_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List articles grouped by work
    Articles,

    /// Show one article
    Article {
        /// Article ID
        id: u64,
    },

    /// Upload a .txt, .docx or .pdf document and print the extracted text
    Upload {
        /// Document to upload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Submit an article for analysis
    Analyze {
        /// Article title
        #[arg(short, long)]
        title: String,

        /// Article text
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,

        /// Read the article text from a file (.docx and .pdf are extracted by the backend)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the stored analysis of an article
    Analysis {
        /// Article ID
        id: u64,
    },

    /// Show the graph extracted from one article
    ArticleGraph {
        /// Article ID
        id: u64,
    },

    /// Delete an article and its graph data
    Delete {
        /// Article ID
        id: u64,
    },

    /// Show knowledge-graph data, optionally for one work
    Graph {
        /// Work ID or work name
        work: Option<String>,
    },

    /// Show knowledge-graph data of one work by ID
    WorkGraph {
        /// Work ID
        id: u64,
    },

    /// List works
    Works,

    /// Show one graph node
    Node {
        /// Node ID
        id: u64,
    },

    /// Show the relationships of one node
    Relationships {
        /// Node ID
        id: u64,
    },

    /// List events, optionally for one work
    Events {
        /// Work ID
        #[arg(short, long)]
        work: Option<u64>,
    },

    /// List characters
    Characters {
        /// Work ID
        #[arg(short, long)]
        work: Option<u64>,

        /// Filter by (partial) character name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Resolve a view path against the route table
    Route {
        /// Path, e.g. /knowledge-graph
        path: String,
    },

    /// Print the route table
    Routes,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CliError> {
    let command = cli.command.clone().unwrap_or(Commands::Routes);

    let output = match command {
        Commands::Route { path } => cmd_route(&path)?,
        Commands::Routes => cmd_routes()?,
        command => {
            let flags = FlagOverrides {
                url: cli.url.clone(),
                timeout_ms: cli.timeout_ms,
            };
            let config = settings::load(cli.config.as_deref(), &flags)?;
            tracing::info!(base_url = %config.base_url, "using backend");
            let api = Api::new(&config)?;
            run(&api, command).await?
        }
    };

    print_json(&output, cli.compact)
}

/// Run one command against the backend and return its JSON output.
pub async fn run(api: &Api, command: Commands) -> Result<Value, CliError> {
    match command {
        Commands::Articles => cmd_articles(api).await,
        Commands::Article { id } => cmd_article(api, id).await,
        Commands::Analyze {
            title,
            content,
            file,
        } => cmd_analyze(api, &title, content, file.as_deref()).await,
        Commands::Upload { file } => cmd_upload(api, &file).await,
        Commands::Analysis { id } => cmd_analysis(api, id).await,
        Commands::ArticleGraph { id } => cmd_article_graph(api, id).await,
        Commands::Delete { id } => cmd_delete(api, id).await,
        Commands::Graph { work } => cmd_graph(api, work.as_deref()).await,
        Commands::WorkGraph { id } => cmd_work_graph(api, id).await,
        Commands::Works => cmd_works(api).await,
        Commands::Node { id } => cmd_node(api, id).await,
        Commands::Relationships { id } => cmd_relationships(api, id).await,
        Commands::Events { work } => cmd_events(api, work).await,
        Commands::Characters { work, name } => cmd_characters(api, work, name).await,
        Commands::Route { path } => cmd_route(&path),
        Commands::Routes => cmd_routes(),
    }
}
