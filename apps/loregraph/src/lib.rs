//! # Loregraph
//!
//! Client for the literary knowledge-graph backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  apps/loregraph (THE BINARY)             │
//! │                                                          │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────┐  │
//! │  │   CLI       │───▶│ API services│───▶│  HttpClient  │──┼──▶ backend
//! │  │  (clap)     │    │ (articles,  │    │  (reqwest +  │  │
//! │  └──────┬──────┘    │  graph)     │    │   hooks)     │  │
//! │         │           └─────────────┘    └──────────────┘  │
//! │         ▼                                                │
//! │  ┌─────────────┐         ┌────────────────────────┐      │
//! │  │ Navigator   │────────▶│     loregraph-core     │      │
//! │  └─────────────┘         │ endpoints, config,     │      │
//! │                          │ route table            │      │
//! │                          └────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod error;
pub mod navigation;
pub mod settings;

pub use api::{Api, ArticleService, GraphService};
pub use client::{ClientError, HttpClient};
pub use error::CliError;
pub use navigation::Navigator;
