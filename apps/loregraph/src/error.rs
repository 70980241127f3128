//! Top-level error for the binary.

use crate::client::ClientError;
use loregraph_core::LoreError;
use thiserror::Error;

/// Anything that can end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The path is not declared in the route table.
    #[error("No route for path '{0}'")]
    UnknownRoute(String),
}

impl CliError {
    /// One-line report for the end of a failed invocation.
    ///
    /// Backend failures were already logged with their path by the client,
    /// so only the kind of failure is repeated here.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Client(ClientError::Status { status, .. }) => {
                format!("backend returned status {status}")
            }
            Self::Client(ClientError::Transport { .. }) => "backend unreachable".to_string(),
            Self::Client(ClientError::Decode { .. }) => "backend returned invalid JSON".to_string(),
            Self::Client(ClientError::Body { .. }) => "request body rejected".to_string(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failure_summary_omits_path() {
        let err = CliError::from(ClientError::Status {
            path: "/node/404/".to_string(),
            status: 404,
            body: "{\"code\": 1}".to_string(),
        });
        let summary = err.summary();
        assert_eq!(summary, "backend returned status 404");
        assert!(!summary.contains("/node/404/"));
    }

    #[test]
    fn local_failure_summary_is_the_full_message() {
        let err = CliError::UnknownRoute("/nowhere".to_string());
        assert_eq!(err.summary(), "No route for path '/nowhere'");

        let err = CliError::from(ClientError::Build("bad header".to_string()));
        assert_eq!(err.summary(), "Invalid client configuration: bad header");
    }
}
