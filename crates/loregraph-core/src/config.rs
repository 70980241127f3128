//! # Client Configuration
//!
//! One configuration for every API call: base URL, timeout and default
//! headers. Loaded from TOML, overridden from the environment, then
//! validated before any client is built.
//!
//! ```toml
//! [client]
//! base_url = "http://localhost:8000/api"
//! timeout_ms = 10000
//!
//! [client.headers]
//! X-Requested-With = "loregraph"
//! ```

use crate::primitives::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, ENV_TIMEOUT_MS, ENV_URL, JSON_CONTENT_TYPE,
};
use crate::types::LoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

const CONTENT_TYPE: &str = "Content-Type";

/// HTTP client settings shared by all API services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute base URL, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Headers attached to every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    client: ClientConfig,
}

impl ClientConfig {
    /// Parse the `[client]` table of a TOML document.
    ///
    /// Missing keys keep their defaults. A `headers` table replaces the
    /// default headers, except that `Content-Type` is always present.
    pub fn from_toml_str(input: &str) -> Result<Self, LoreError> {
        let file: ConfigFile =
            toml::from_str(input).map_err(|e| LoreError::ConfigParse(e.to_string()))?;
        let mut config = file.client;
        config.ensure_content_type();
        Ok(config)
    }

    /// Apply `LOREGRAPH_URL` / `LOREGRAPH_TIMEOUT_MS` through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), LoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.timeout_ms = raw.trim().parse().map_err(|_| {
                LoreError::InvalidConfig(format!("{ENV_TIMEOUT_MS} is not a number: {raw}"))
            })?;
        }
        Ok(())
    }

    /// Check the configuration and normalise the base URL.
    ///
    /// The base URL must be absolute (`http://` or `https://` with a host).
    /// Trailing slashes are removed so paths join with exactly one `/`.
    pub fn validate(mut self) -> Result<Self, LoreError> {
        let base = self.base_url.trim().trim_end_matches('/').to_string();

        let rest = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))
            .ok_or_else(|| {
                LoreError::InvalidConfig(format!(
                    "base_url must be an absolute http(s) URL, got '{}'",
                    self.base_url
                ))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(LoreError::InvalidConfig(format!(
                "base_url has no host: '{}'",
                self.base_url
            )));
        }

        if self.timeout_ms == 0 {
            return Err(LoreError::InvalidConfig(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }

        self.base_url = base;
        self.ensure_content_type();
        Ok(self)
    }

    /// Full URL for a path relative to the base.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn ensure_content_type(&mut self) {
        let present = self
            .headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case(CONTENT_TYPE));
        if !present {
            self.headers
                .insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
