//! Descriptions of the request a query would produce, for display.
//!
//! For GraphQL endpoints the payload is the exact body that gets POSTed. For
//! the REST adapter the preview is descriptive: the real request is a GET
//! without a body, so the selected fields are listed alongside the query
//! parameters instead.

use crate::query::BuiltQuery;
use crate::selection::FieldKey;
use serde::Serialize;
use std::collections::BTreeMap;

/// Replaces the hidden part of a secret.
pub const MASK: &str = "•••";

/// Hide the middle of a secret: keep the first 6 and last 4 characters.
/// Secrets of 10 characters or fewer are hidden entirely; an empty secret
/// is returned as is.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() <= 10 {
        return MASK.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{MASK}{tail}")
}

/// Query parameters of the REST request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestParams {
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_ids: Option<String>,
}

/// Body of a GraphQL POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLPayload {
    pub operation_name: String,
    pub variables: serde_json::Value,
    pub query: String,
}

impl GraphQLPayload {
    pub fn from_query(query: &BuiltQuery) -> Self {
        Self {
            operation_name: query.operation_name.clone(),
            variables: query.variables.clone(),
            query: query.query.clone(),
        }
    }
}

/// The request a transport would send. `payload` always serializes, as
/// `null` for bodiless requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPreview {
    pub method: &'static str,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RestParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fields: Option<Vec<FieldKey>>,
    pub payload: Option<GraphQLPayload>,
}

impl RequestPreview {
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Describe the GET the REST adapter sends for `query`.
pub fn rest_preview(url: &str, api_key: Option<&str>, query: &BuiltQuery) -> RequestPreview {
    let mut headers = BTreeMap::new();
    if let Some(key) = api_key {
        headers.insert("x-api-key".to_string(), mask_key(key));
    }
    let variables = query.cat_variables();
    RequestPreview {
        method: "GET",
        url: url.to_string(),
        headers,
        params: variables.map(|v| RestParams {
            limit: v.limit,
            breed_ids: v.breed_id,
        }),
        selected_fields: Some(query.selected_fields.clone()),
        payload: None,
    }
}

/// Describe the POST a GraphQL endpoint receives for `query`.
pub fn graphql_preview(url: &str, query: &BuiltQuery) -> RequestPreview {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    RequestPreview {
        method: "POST",
        url: url.to_string(),
        headers,
        params: None,
        selected_fields: None,
        payload: Some(GraphQLPayload::from_query(query)),
    }
}
