//! # Loregraph API Services
//!
//! Named operations over the knowledge-graph backend.
//!
//! ## Services
//!
//! - `ArticleService` - article list/detail, document upload, AI analysis, per-article graph, deletion
//! - `GraphService` - knowledge-graph data (all, per work), works, nodes, relationships, events, characters
//!
//! Every operation performs exactly one HTTP call through the shared
//! [`HttpClient`]. Payloads are returned as the backend sent them; failures
//! are the client's error, unchanged. Logging happens once, in the client.

mod articles;
mod graph;

pub use articles::ArticleService;
pub use graph::GraphService;

use crate::client::{ClientError, HttpClient};
use loregraph_core::ClientConfig;

/// Both services over one shared client.
#[derive(Debug, Clone)]
pub struct Api {
    pub articles: ArticleService,
    pub graph: GraphService,
}

impl Api {
    /// Build the services from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::from_client(HttpClient::new(config)?))
    }

    #[must_use]
    pub fn from_client(client: HttpClient) -> Self {
        Self {
            articles: ArticleService::new(client.clone()),
            graph: GraphService::new(client),
        }
    }
}
