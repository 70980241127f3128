//! # CLI Commands
//!
//! Implementations of CLI commands. Each backend command makes one API call
//! and returns the payload untouched; `analyze` on a Word or PDF file
//! uploads it first to get its text.

use crate::api::Api;
use crate::error::CliError;
use crate::navigation::Navigator;
use loregraph_core::{ArticleId, CharacterQuery, NodeId, WorkId, WorkRef, needs_text_extraction};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of an article file submitted for analysis (10 MB).
const MAX_ARTICLE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Refuse anything that is not a regular file within the size limit.
fn check_article_file(path: &Path) -> Result<(), CliError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_ARTICLE_FILE_SIZE {
        return Err(CliError::InvalidInput(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_ARTICLE_FILE_SIZE
        )));
    }
    Ok(())
}

/// Read a document to upload, with the name it is sent under.
fn read_upload_file(path: &Path) -> Result<(String, Vec<u8>), CliError> {
    check_article_file(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("'{}' has no file name", path.display())))?;
    Ok((file_name, std::fs::read(path)?))
}

/// Text of an article file: read locally, or extracted by the backend for
/// Word and PDF documents.
async fn article_text(api: &Api, path: &Path) -> Result<String, CliError> {
    let (file_name, bytes) = read_upload_file(path)?;
    if !needs_text_extraction(&file_name) {
        return String::from_utf8(bytes).map_err(|e| {
            CliError::InvalidInput(format!("'{}' is not UTF-8 text: {e}", path.display()))
        });
    }
    let uploaded = api.articles.upload_file(&file_name, bytes).await?;
    uploaded["data"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            let message = uploaded["message"].as_str().unwrap_or("no content returned");
            CliError::InvalidInput(format!("'{}' was not accepted: {message}", path.display()))
        })
}

/// Write a JSON value to stdout.
pub fn print_json(value: &Value, compact: bool) -> Result<(), CliError> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

// =============================================================================
// ARTICLE COMMANDS
// =============================================================================

pub async fn cmd_articles(api: &Api) -> Result<Value, CliError> {
    Ok(api.articles.get_article_list().await?)
}

pub async fn cmd_article(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.articles.get_article_detail(ArticleId(id)).await?)
}

/// Submit an article; the text comes from `--content` or `--file`.
///
/// `.docx` and `.pdf` files are uploaded first so the backend can extract
/// their text; everything else is read locally as UTF-8.
pub async fn cmd_analyze(
    api: &Api,
    title: &str,
    content: Option<String>,
    file: Option<&Path>,
) -> Result<Value, CliError> {
    let content = match (content, file) {
        (Some(text), _) => text,
        (None, Some(path)) => article_text(api, path).await?,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "either --content or --file is required".to_string(),
            ));
        }
    };
    Ok(api.articles.analyze_article(title, &content).await?)
}

/// Upload a document and return the text the backend extracted from it.
pub async fn cmd_upload(api: &Api, path: &Path) -> Result<Value, CliError> {
    let (file_name, bytes) = read_upload_file(path)?;
    Ok(api.articles.upload_file(&file_name, bytes).await?)
}

pub async fn cmd_analysis(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.articles.get_article_analysis(ArticleId(id)).await?)
}

pub async fn cmd_article_graph(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.articles.get_article_graph(ArticleId(id)).await?)
}

pub async fn cmd_delete(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.articles.delete_article(ArticleId(id)).await?)
}

// =============================================================================
// GRAPH COMMANDS
// =============================================================================

pub async fn cmd_graph(api: &Api, work: Option<&str>) -> Result<Value, CliError> {
    Ok(api.graph.get_graph_data(WorkRef::from_input(work)).await?)
}

pub async fn cmd_work_graph(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.graph.get_work_graph(WorkId(id)).await?)
}

pub async fn cmd_works(api: &Api) -> Result<Value, CliError> {
    Ok(api.graph.get_works().await?)
}

pub async fn cmd_node(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.graph.get_node_details(NodeId(id)).await?)
}

pub async fn cmd_relationships(api: &Api, id: u64) -> Result<Value, CliError> {
    Ok(api.graph.get_relationships(NodeId(id)).await?)
}

pub async fn cmd_events(api: &Api, work: Option<u64>) -> Result<Value, CliError> {
    Ok(api.graph.get_events(work.map(WorkId)).await?)
}

pub async fn cmd_characters(
    api: &Api,
    work: Option<u64>,
    name: Option<String>,
) -> Result<Value, CliError> {
    let query = CharacterQuery {
        work_id: work.map(WorkId),
        character_name: name,
    };
    Ok(api.graph.get_character_details(&query).await?)
}

// =============================================================================
// ROUTE COMMANDS
// =============================================================================

/// Resolve one path through the navigation hook.
pub fn cmd_route(path: &str) -> Result<Value, CliError> {
    let route = Navigator::new()
        .navigate(path)
        .ok_or_else(|| CliError::UnknownRoute(path.to_string()))?;
    Ok(serde_json::to_value(route)?)
}

/// The full route table.
pub fn cmd_routes() -> Result<Value, CliError> {
    Ok(serde_json::to_value(Navigator::new().routes())?)
}
