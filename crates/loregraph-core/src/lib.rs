//! # loregraph-core
//!
//! The shared contract of the Loregraph client - THE CONTRACT.
//!
//! This crate describes, as plain data, everything the client agrees on with
//! the knowledge-graph backend and with the view layer:
//! - which endpoints exist and how their paths are built (`endpoint`)
//! - how the single HTTP client is configured (`config`)
//! - which URL path shows which view (`router`)
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - Never reads the process environment; overrides are injected
//! - Never interprets response payloads; those stay opaque JSON

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod endpoint;
pub mod primitives;
pub mod router;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use config::ClientConfig;
pub use endpoint::{Endpoint, Method};
pub use router::{Layout, ROUTES, Route, View, find_by_name, resolve};
pub use types::{
    AnalyzeRequest, ArticleId, CharacterQuery, LoreError, NodeId, WorkId, WorkRef,
    needs_text_extraction, upload_content_type,
};
