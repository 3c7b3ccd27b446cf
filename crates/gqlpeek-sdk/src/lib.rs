pub mod config;
pub mod error;
pub mod preview;
pub mod query;
pub mod records;
pub mod selection;
pub mod session;
pub mod students;
pub mod transport;

// Re-export key types at crate root for convenience.
pub use error::PeekError;
pub use preview::RequestPreview;
pub use query::{BuiltQuery, QueryInputs, Section};
pub use selection::{FieldKey, SelectionSet};
pub use session::{Phase, Session};
pub use transport::{GraphQLTransport, LocalSchemaTransport, RestTransport, Transport};
