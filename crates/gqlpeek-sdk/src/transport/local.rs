use super::{into_records, Transport};
use crate::error::{GraphQLError, PeekError};
use crate::preview::{graphql_preview, RequestPreview};
use crate::query::BuiltQuery;
use crate::students::{build_schema, StudentStore, StudentsSchema};

/// Address shown in previews. Nothing listens there; the schema runs in
/// process.
const LOCAL_URL: &str = "/graphql";

/// Executes queries against the in-process students schema.
#[derive(Clone)]
pub struct LocalSchemaTransport {
    schema: StudentsSchema,
}

impl LocalSchemaTransport {
    pub fn new(store: StudentStore) -> Self {
        Self {
            schema: build_schema(store),
        }
    }

    /// Serve the built-in student dataset.
    pub fn seeded() -> Self {
        Self::new(StudentStore::seeded())
    }
}

#[async_trait::async_trait]
impl Transport for LocalSchemaTransport {
    fn preview(&self, query: &BuiltQuery) -> RequestPreview {
        graphql_preview(LOCAL_URL, query)
    }

    async fn execute(&self, query: &BuiltQuery) -> Result<Vec<serde_json::Value>, PeekError> {
        tracing::debug!(operation = %query.operation_name, "executing against local schema");
        let request = async_graphql::Request::new(query.query.as_str())
            .operation_name(query.operation_name.as_str())
            .variables(async_graphql::Variables::from_json(query.variables.clone()));
        let response = self.schema.execute(request).await;

        if !response.errors.is_empty() {
            let errors = response
                .errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    extensions: e
                        .extensions
                        .as_ref()
                        .and_then(|ext| serde_json::to_value(ext).ok()),
                    path: (!e.path.is_empty())
                        .then(|| serde_json::to_value(&e.path).ok())
                        .flatten()
                        .and_then(|v| v.as_array().cloned()),
                })
                .collect();
            return Err(PeekError::GraphQL {
                errors,
                query_name: Some(query.operation_name.clone()),
            });
        }

        let mut data = response
            .data
            .into_json()
            .map_err(|e| PeekError::MissingData(format!("Unreadable response data: {}", e)))?;
        let value = data
            .get_mut(&query.root_field)
            .map(serde_json::Value::take)
            .ok_or_else(|| {
                PeekError::MissingData(format!("No '{}' in response data", query.root_field))
            })?;

        into_records(value, &query.root_field)
    }
}
