//! Endpoint and credential resolution.
//!
//! Every setting follows the same precedence: explicit value (CLI flag) ->
//! environment variable -> file or built-in default.

use crate::error::PeekError;
use std::path::{Path, PathBuf};

/// Default base URL of The Cat API.
pub const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/v1";

const CAT_API_KEY_ENV: &str = "CAT_API_KEY";
const CAT_API_URL_ENV: &str = "CAT_API_URL";
const GRAPHQL_URL_ENV: &str = "GQLPEEK_GRAPHQL_URL";
const CAT_API_KEY_FILE: &str = ".cat_api_key";

/// Resolved configuration shared by every transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cat_api_url: String,
    /// Sent as `x-api-key` when present. The Cat API serves anonymous
    /// requests too, so a missing key is not an error.
    pub cat_api_key: Option<String>,
    graphql_url: Option<String>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cat_api_url: Option<String>,
    pub cat_api_key: Option<String>,
    pub graphql_url: Option<String>,
}

impl Config {
    /// Resolve the configuration from overrides, the environment and files.
    pub fn resolve(overrides: Overrides) -> Result<Self, PeekError> {
        let cat_api_url = match overrides.cat_api_url.or_else(|| env_value(CAT_API_URL_ENV)) {
            Some(url) => validate_url(&url)?,
            None => DEFAULT_CAT_API_URL.to_string(),
        };
        let cat_api_key = overrides
            .cat_api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| cat_api_key_from_env().ok())
            .or_else(|| cat_api_key_from_file().ok());
        let graphql_url = overrides
            .graphql_url
            .or_else(|| env_value(GRAPHQL_URL_ENV))
            .map(|url| validate_url(&url))
            .transpose()?;

        Ok(Self {
            cat_api_url,
            cat_api_key,
            graphql_url,
        })
    }

    /// Build a configuration by hand (tests, embedding).
    pub fn new(
        cat_api_url: impl Into<String>,
        cat_api_key: Option<String>,
        graphql_url: Option<String>,
    ) -> Self {
        Self {
            cat_api_url: cat_api_url.into(),
            cat_api_key,
            graphql_url,
        }
    }

    /// The remote GraphQL endpoint. Only GraphQL transports need it.
    pub fn graphql_url(&self) -> Result<&str, PeekError> {
        self.graphql_url.as_deref().ok_or_else(|| {
            PeekError::Config(format!(
                "no GraphQL endpoint configured (use --graphql-url or set {})",
                GRAPHQL_URL_ENV
            ))
        })
    }
}

/// Read the Cat API key from the `CAT_API_KEY` environment variable.
pub fn cat_api_key_from_env() -> Result<String, PeekError> {
    env_value(CAT_API_KEY_ENV)
        .ok_or_else(|| PeekError::Config(format!("{} environment variable not set", CAT_API_KEY_ENV)))
}

/// Read the Cat API key from `~/.cat_api_key`.
pub fn cat_api_key_from_file() -> Result<String, PeekError> {
    read_key_file(&key_file_path())
}

/// Read a key file, trimming surrounding whitespace. An empty file is an error.
pub fn read_key_file(path: &Path) -> Result<String, PeekError> {
    let key = std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            PeekError::Config(format!(
                "Could not read key file {}: {}",
                path.display(),
                e
            ))
        })?;
    if key.is_empty() {
        return Err(PeekError::Config(format!(
            "Key file {} is empty",
            path.display()
        )));
    }
    Ok(key)
}

fn key_file_path() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(CAT_API_KEY_FILE)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_url(raw: &str) -> Result<String, PeekError> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| PeekError::Config(format!("invalid URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PeekError::Config(format!(
            "invalid URL '{}': expected http or https",
            raw
        )));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}
