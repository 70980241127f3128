//! # Settings Loader
//!
//! Builds the effective [`ClientConfig`]. Precedence, lowest first:
//!
//! 1. built-in defaults
//! 2. TOML file (`--config`, else `LOREGRAPH_CONFIG`)
//! 3. environment (`LOREGRAPH_URL`, `LOREGRAPH_TIMEOUT_MS`)
//! 4. command-line flags

use loregraph_core::{ClientConfig, LoreError, primitives::ENV_CONFIG};
use std::path::{Path, PathBuf};

/// Flag values that override everything else.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub url: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Load settings from the real process environment.
pub fn load(config_path: Option<&Path>, flags: &FlagOverrides) -> Result<ClientConfig, LoreError> {
    load_with(config_path, flags, |key| std::env::var(key).ok())
}

/// Load settings with an injected environment lookup.
pub fn load_with<F>(
    config_path: Option<&Path>,
    flags: &FlagOverrides,
    lookup: F,
) -> Result<ClientConfig, LoreError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = config_path
        .map(Path::to_path_buf)
        .or_else(|| lookup(ENV_CONFIG).map(PathBuf::from));

    let mut config = match file {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                LoreError::Io(format!("Cannot read config '{}': {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "loaded configuration file");
            ClientConfig::from_toml_str(&text)?
        }
        None => ClientConfig::default(),
    };

    config.apply_overrides(&lookup)?;

    if let Some(ref url) = flags.url {
        config.base_url = url.clone();
    }
    if let Some(timeout_ms) = flags.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_file_env_or_flags() {
        let config = load_with(None, &FlagOverrides::default(), no_env).expect("load");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn file_then_env_then_flags() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "[client]\nbase_url = \"http://file.example/api\"\ntimeout_ms = 1000"
        )
        .expect("write");

        let env = |key: &str| match key {
            "LOREGRAPH_TIMEOUT_MS" => Some("2000".to_string()),
            _ => None,
        };
        let flags = FlagOverrides {
            url: Some("http://flag.example/api/".to_string()),
            timeout_ms: None,
        };

        let config = load_with(Some(file.path()), &flags, env).expect("load");
        assert_eq!(config.base_url, "http://flag.example/api");
        assert_eq!(config.timeout_ms, 2000);
    }

    #[test]
    fn config_path_can_come_from_env() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[client]\ntimeout_ms = 42").expect("write");
        let path = file.path().to_string_lossy().to_string();

        let env = move |key: &str| (key == "LOREGRAPH_CONFIG").then(|| path.clone());
        let config = load_with(None, &FlagOverrides::default(), env).expect("load");
        assert_eq!(config.timeout_ms, 42);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_with(
            Some(Path::new("/nonexistent/loregraph.toml")),
            &FlagOverrides::default(),
            no_env,
        )
        .expect_err("missing file");
        assert!(matches!(err, LoreError::Io(_)));
    }

    #[test]
    fn relative_url_flag_is_rejected() {
        let flags = FlagOverrides {
            url: Some("/api".to_string()),
            timeout_ms: None,
        };
        let err = load_with(None, &flags, no_env).expect_err("relative url");
        assert!(matches!(err, LoreError::InvalidConfig(_)));
    }
}
