//! # Core Type Definitions
//!
//! This module contains the small set of typed values the client passes to
//! the knowledge-graph backend:
//! - Identifiers (`ArticleId`, `NodeId`, `WorkId`)
//! - Work references that may be a numeric id or a work name (`WorkRef`)
//! - Request bodies and query parameters (`AnalyzeRequest`, `CharacterQuery`)
//! - Upload content types (`upload_content_type`)
//! - Error types (`LoreError`)
//!
//! Response payloads are NOT modelled here. Articles, graph data, nodes and
//! relationships stay opaque JSON all the way to the caller.

use crate::primitives::{
    DOCX_CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE, PDF_CONTENT_TYPE, TEXT_CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a stored article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

/// Identifier of a node in the knowledge graph (character, faction, event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Identifier of a literary work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// WORK REFERENCE
// =============================================================================

/// A work addressed either by id or by name.
///
/// The backend accepts both forms under `/graph/{work}/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkRef {
    /// Numeric work id.
    Id(WorkId),
    /// Work name, inserted into the path verbatim.
    Name(String),
}

impl WorkRef {
    /// Interpret user input: all ASCII digits is an id, anything else a name.
    ///
    /// Surrounding whitespace only matters for the id check; names are kept
    /// exactly as given.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u64>() {
                return Self::Id(WorkId(id));
            }
        }
        Self::Name(input.to_string())
    }

    /// Optional user input: absent, empty or blank means "all works".
    #[must_use]
    pub fn from_input(input: Option<&str>) -> Option<Self> {
        input
            .filter(|s| !s.trim().is_empty())
            .map(Self::parse)
    }

    /// An empty name addresses no work at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Name(name) if name.is_empty())
    }
}

impl From<WorkId> for WorkRef {
    fn from(id: WorkId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for WorkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Body of `POST /article/analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub title: String,
    pub content: String,
}

impl AnalyzeRequest {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Filters for `GET /character-details/`.
///
/// Both filters are optional; absent fields are not sent at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_id: Option<WorkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
}

impl CharacterQuery {
    /// Query parameters as ordered `(key, value)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.work_id {
            pairs.push(("work_id", id.to_string()));
        }
        if let Some(ref name) = self.character_name {
            pairs.push(("character_name", name.clone()));
        }
        pairs
    }
}

// =============================================================================
// UPLOADS
// =============================================================================

/// Content type to declare for an uploaded document, chosen by extension.
///
/// The backend extracts text from `.txt`, `.docx` and `.pdf` files; any
/// other file is sent as `application/octet-stream` and refused there.
#[must_use]
pub fn upload_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" => TEXT_CONTENT_TYPE,
        "docx" => DOCX_CONTENT_TYPE,
        "pdf" => PDF_CONTENT_TYPE,
        _ => OCTET_STREAM_CONTENT_TYPE,
    }
}

/// Whether the backend has to extract the text (Word and PDF documents).
#[must_use]
pub fn needs_text_extraction(file_name: &str) -> bool {
    matches!(
        upload_content_type(file_name),
        DOCX_CONTENT_TYPE | PDF_CONTENT_TYPE
    )
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the pure side of the client.
///
/// Network failures are not represented here; they belong to the HTTP layer.
#[derive(Debug, Error)]
pub enum LoreError {
    /// A configuration value is present but not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
