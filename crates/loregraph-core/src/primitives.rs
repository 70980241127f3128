//! # Client Primitives
//!
//! Fixed constants shared by the configuration layer and the binary.
//!
//! These are compiled into the binary and only change through explicit
//! configuration (file, environment, or flags).

/// Default backend base URL.
///
/// The backend serves every endpoint below this prefix. All relative
/// endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Content type sent with every request and expected on every response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// ENVIRONMENT KEYS
// =============================================================================

/// Overrides the backend base URL.
pub const ENV_URL: &str = "LOREGRAPH_URL";

/// Overrides the request timeout (milliseconds).
pub const ENV_TIMEOUT_MS: &str = "LOREGRAPH_TIMEOUT_MS";

/// Path to a TOML configuration file.
pub const ENV_CONFIG: &str = "LOREGRAPH_CONFIG";

// =============================================================================
// UPLOADS
// =============================================================================

/// Multipart field name the upload endpoint reads the document from.
pub const UPLOAD_FIELD: &str = "file";

/// Plain-text documents.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Word documents.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// PDF documents.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Anything else. The backend refuses it.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";
