//! Error types for the gqlpeek SDK.
//!
//! [`PeekError`] covers configuration problems, HTTP transport errors,
//! GraphQL-level errors and responses that do not have the expected shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single GraphQL error from a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// Errors that can occur while executing a query.
#[derive(Debug)]
pub enum PeekError {
    /// The endpoint rejected the credentials (HTTP 401).
    Authentication(String),
    /// The endpoint refused the request (HTTP 403).
    Forbidden(String),
    /// Network or HTTP transport error.
    Network(reqwest::Error),
    /// GraphQL errors returned by the endpoint or the local schema.
    GraphQL {
        errors: Vec<GraphQLError>,
        query_name: Option<String>,
    },
    /// The requested data path was not found in the response.
    MissingData(String),
    /// Non-2xx HTTP response not covered by a more specific variant.
    HttpError { status: u16, body: String },
    /// Missing or invalid configuration (endpoint URL, key file).
    Config(String),
    /// The transport cannot serve the requested root field.
    Unsupported(String),
}

impl fmt::Display for PeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::GraphQL { errors, query_name } => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        let mut parts = vec![e.message.clone()];
                        if let Some(ext) = &e.extensions {
                            parts.push(format!("({})", ext));
                        }
                        if let Some(path) = &e.path {
                            let path_str: Vec<String> =
                                path.iter().map(|p| p.to_string()).collect();
                            parts.push(format!("at {}", path_str.join(".")));
                        }
                        parts.join(" ")
                    })
                    .collect();
                if let Some(name) = query_name {
                    write!(f, "GraphQL errors in {}: {}", name, msgs.join("; "))
                } else {
                    write!(f, "GraphQL errors: {}", msgs.join("; "))
                }
            }
            Self::MissingData(path) => write!(f, "Missing data at path: {}", path),
            Self::HttpError { status, body } => write!(f, "HTTP error {}: {}", status, body),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Unsupported(msg) => write!(f, "Unsupported query: {}", msg),
        }
    }
}

impl std::error::Error for PeekError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PeekError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}
