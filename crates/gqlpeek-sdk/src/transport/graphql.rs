use super::{into_records, Transport};
use crate::error::{GraphQLError, PeekError};
use crate::preview::{graphql_preview, GraphQLPayload, RequestPreview};
use crate::query::BuiltQuery;

/// Sends queries to a remote GraphQL endpoint over HTTP POST.
#[derive(Debug, Clone)]
pub struct GraphQLTransport {
    http: reqwest::Client,
    url: String,
}

/// Raw GraphQL response shape.
#[derive(serde::Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLError>>,
}

impl GraphQLTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl Transport for GraphQLTransport {
    fn preview(&self, query: &BuiltQuery) -> RequestPreview {
        graphql_preview(&self.url, query)
    }

    async fn execute(&self, query: &BuiltQuery) -> Result<Vec<serde_json::Value>, PeekError> {
        let body = GraphQLPayload::from_query(query);
        tracing::debug!(url = %self.url, operation = %query.operation_name, "POST graphql");

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header(
                "User-Agent",
                format!("gqlpeek-sdk/{}", env!("CARGO_PKG_VERSION")),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == 401 || status == 403 {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "graphql endpoint rejected request");
            if status == 401 {
                return Err(PeekError::Authentication(text));
            }
            return Err(PeekError::Forbidden(text));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "graphql endpoint returned an error");
            return Err(PeekError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let gql_response: GraphQLResponse = response.json().await?;

        if let Some(errors) = gql_response.errors {
            if !errors.is_empty() {
                return Err(PeekError::GraphQL {
                    errors,
                    query_name: Some(query.operation_name.clone()),
                });
            }
        }

        let mut data = gql_response
            .data
            .ok_or_else(|| PeekError::MissingData("No data in response".to_string()))?;

        let value = data
            .get_mut(&query.root_field)
            .map(serde_json::Value::take)
            .ok_or_else(|| {
                PeekError::MissingData(format!("No '{}' in response data", query.root_field))
            })?;

        into_records(value, &query.root_field)
    }
}
