//! Transports: how a built query reaches its data.
//!
//! Each [`Transport`] can describe the request it would send
//! ([`Transport::preview`], no I/O) and send it ([`Transport::execute`],
//! exactly one request, no caching or retry).

mod graphql;
mod local;
mod rest;

pub use graphql::GraphQLTransport;
pub use local::LocalSchemaTransport;
pub use rest::RestTransport;

use crate::error::PeekError;
use crate::preview::RequestPreview;
use crate::query::BuiltQuery;

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// The request `query` would produce.
    fn preview(&self, query: &BuiltQuery) -> RequestPreview;

    /// Send `query` and return the records under its root field.
    async fn execute(&self, query: &BuiltQuery) -> Result<Vec<serde_json::Value>, PeekError>;
}

/// Turn the value found under a root field into a record list. A single
/// object counts as one record; `null` as none.
pub(crate) fn into_records(
    value: serde_json::Value,
    root_field: &str,
) -> Result<Vec<serde_json::Value>, PeekError> {
    match value {
        serde_json::Value::Array(items) => Ok(items),
        serde_json::Value::Null => Ok(Vec::new()),
        obj @ serde_json::Value::Object(_) => Ok(vec![obj]),
        other => Err(PeekError::MissingData(format!(
            "expected a list under '{}', got {}",
            root_field, other
        ))),
    }
}
