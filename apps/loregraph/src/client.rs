//! # Loregraph HTTP Client
//!
//! Thin wrapper around `reqwest` that every API service goes through.
//!
//! The wrapper holds only static configuration (base URL, timeout, default
//! headers), so one instance can be cloned and shared across tasks.
//!
//! ## Logging hooks
//!
//! - before dispatch: `debug` event with method and path
//! - on success: `debug` event with path and payload
//! - on failure: one `error` event with path and message
//!
//! Uploads go through the same hooks as JSON calls.
//!
//! Errors are handed back to the caller as they happened. There is no retry
//! and no reclassification of status codes.

use loregraph_core::{ClientConfig, Endpoint, Method};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors from the HTTP client layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed from its configuration.
    #[error("Invalid client configuration: {0}")]
    Build(String),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("Server returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// A multipart body could not be assembled.
    #[error("Invalid request body for {path}: {source}")]
    Body {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("Invalid JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Request path the error refers to, if a request was made.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Build(_) => None,
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Body { path, .. }
            | Self::Decode { path, .. } => Some(path.as_str()),
        }
    }

    /// HTTP status for `Status` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Build a client from configuration.
    ///
    /// The configuration is validated first; relative base URLs are refused.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let config = config
            .clone()
            .validate()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Build(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Build(format!("header value for '{}': {e}", name.as_str())))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` relative to the base URL.
    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let req = self.request(Method::Get, path);
        self.execute(Method::Get, path, req).await
    }

    /// GET `path` with query parameters.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ClientError> {
        let req = self.request(Method::Get, path).query(query);
        self.execute(Method::Get, path, req).await
    }

    /// POST a JSON body to `path`.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::Post, path).json(body);
        self.execute(Method::Post, path, req).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        let req = self.request(Method::Delete, path);
        self.execute(Method::Delete, path, req).await
    }

    /// Call a catalogued endpoint without a body.
    pub async fn call(&self, endpoint: &Endpoint) -> Result<Value, ClientError> {
        let method = endpoint.method();
        let path = endpoint.path();
        let req = self.request(method, &path);
        self.execute(method, &path, req).await
    }

    /// Call a catalogued endpoint with a JSON body.
    pub async fn call_with_body<B>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let method = endpoint.method();
        let path = endpoint.path();
        let req = self.request(method, &path).json(body);
        self.execute(method, &path, req).await
    }

    /// Upload one document as the multipart field of `endpoint`.
    pub async fn call_multipart(
        &self,
        endpoint: &Endpoint,
        field: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ClientError> {
        let method = endpoint.method();
        let path = endpoint.path();
        let part = match reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
        {
            Ok(part) => part,
            Err(source) => {
                let e = ClientError::Body {
                    path: path.clone(),
                    source,
                };
                tracing::error!(path = path.as_str(), error = %e, "request failed");
                return Err(e);
            }
        };
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);
        let req = self.request(method, &path).multipart(form);
        self.execute(method, &path, req).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.config.url_for(path);
        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        self.http.request(method, url)
    }

    /// Run a request through the logging hooks.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<Value, ClientError> {
        tracing::debug!(%method, path, "sending request");

        let outcome = self.dispatch(path, req).await;
        match &outcome {
            Ok(payload) => tracing::debug!(path, %payload, "received response"),
            Err(e) => tracing::error!(path, error = %e, "request failed"),
        }
        outcome
    }

    async fn dispatch(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<Value, ClientError> {
        let resp = req.send().await.map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_base_url_fails_to_build() {
        let config = ClientConfig {
            base_url: "/api".to_string(),
            ..ClientConfig::default()
        };
        let err = HttpClient::new(&config).expect_err("relative base must fail");
        assert!(matches!(err, ClientError::Build(_)));
        assert!(err.path().is_none());
    }

    #[test]
    fn invalid_header_name_fails_to_build() {
        let mut config = ClientConfig::default();
        config
            .headers
            .insert("bad header".to_string(), "x".to_string());
        let err = HttpClient::new(&config).expect_err("bad header must fail");
        assert!(err.to_string().contains("bad header"));
    }

    #[test]
    fn base_url_is_normalised() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8000/api/".to_string(),
            ..ClientConfig::default()
        };
        let client = HttpClient::new(&config).expect("client");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000/api");
    }

    #[tokio::test]
    async fn malformed_upload_content_type_is_a_body_error() {
        let client = HttpClient::new(&ClientConfig::default()).expect("client");
        let err = client
            .call_multipart(
                &Endpoint::UploadArticle,
                "file",
                "x.txt",
                "not a mime",
                b"x".to_vec(),
            )
            .await
            .expect_err("invalid mime must fail before sending");
        assert!(matches!(err, ClientError::Body { .. }));
        assert_eq!(err.path(), Some("/article/upload/"));
    }

    #[test]
    fn status_error_exposes_path_and_status() {
        let err = ClientError::Status {
            path: "/works/".to_string(),
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.path(), Some("/works/"));
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Server returned 503 for /works/: down");
    }
}
