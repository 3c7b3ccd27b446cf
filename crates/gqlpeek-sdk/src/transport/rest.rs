//! REST-to-GraphQL adapter for The Cat API.
//!
//! The GraphQL query is never sent. Its root field selects a REST route,
//! its variables become query parameters, and the JSON that comes back is
//! cut down to the selected fields so callers see what a GraphQL server
//! would have returned.

use super::{into_records, Transport};
use crate::config::DEFAULT_CAT_API_URL;
use crate::error::PeekError;
use crate::preview::{rest_preview, RequestPreview};
use crate::query::BuiltQuery;
use crate::selection::FieldKey;

/// Root fields the adapter knows, and the REST path serving each.
const ROUTES: &[(&str, &str)] = &[("catImages", "/images/search")];

#[derive(Debug, Clone)]
pub struct RestTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestTransport {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// The Cat API at its public address.
    pub fn cat_api(api_key: Option<String>) -> Self {
        Self::new(DEFAULT_CAT_API_URL, api_key)
    }

    fn route_url(&self, root_field: &str) -> Result<String, PeekError> {
        ROUTES
            .iter()
            .find(|(field, _)| *field == root_field)
            .map(|(_, path)| format!("{}{}", self.base_url, path))
            .ok_or_else(|| {
                PeekError::Unsupported(format!("no REST route for root field '{}'", root_field))
            })
    }
}

#[async_trait::async_trait]
impl Transport for RestTransport {
    fn preview(&self, query: &BuiltQuery) -> RequestPreview {
        let url = self
            .route_url(&query.root_field)
            .unwrap_or_else(|_| self.base_url.clone());
        rest_preview(&url, self.api_key.as_deref(), query)
    }

    async fn execute(&self, query: &BuiltQuery) -> Result<Vec<serde_json::Value>, PeekError> {
        let url = self.route_url(&query.root_field)?;
        let variables = query.cat_variables().ok_or_else(|| {
            PeekError::Unsupported(format!(
                "variables of '{}' do not match the REST route",
                query.operation_name
            ))
        })?;

        let mut params = vec![("limit", variables.limit.to_string())];
        if let Some(breed) = variables.breed_id {
            params.push(("breed_ids", breed));
        }
        tracing::debug!(url = %url, limit = variables.limit, "GET rest");

        let mut request = self.http.get(&url).query(&params);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        let response = request.send().await?;

        let status = response.status();
        if status == 401 {
            let text = response.text().await.unwrap_or_default();
            return Err(PeekError::Authentication(text));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "rest endpoint returned an error");
            return Err(PeekError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response.json().await?;
        let records = into_records(value, &query.root_field)?;
        Ok(records
            .into_iter()
            .map(|record| project(record, &query.selected_fields))
            .collect())
    }
}

/// Keep only the selected fields of a record. Nested fields keep `id` and
/// `name` of each entry. An empty selection keeps `id`.
fn project(record: serde_json::Value, fields: &[FieldKey]) -> serde_json::Value {
    let mut source = match record {
        serde_json::Value::Object(map) => map,
        other => return other,
    };
    let default = [FieldKey::from(crate::selection::DEFAULT_FIELD)];
    let fields = if fields.is_empty() { &default[..] } else { fields };

    let mut out = serde_json::Map::new();
    for key in fields {
        let value = source
            .remove(key.as_str())
            .unwrap_or(serde_json::Value::Null);
        let value = if key.is_nested() {
            project_named_list(value)
        } else {
            value
        };
        out.insert(key.as_str().to_string(), value);
    }
    serde_json::Value::Object(out)
}

fn project_named_list(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(items) => serde_json::Value::Array(
            items
                .into_iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.get("id").cloned().unwrap_or_default(),
                        "name": item.get("name").cloned().unwrap_or_default(),
                    })
                })
                .collect(),
        ),
        other => other,
    }
}
